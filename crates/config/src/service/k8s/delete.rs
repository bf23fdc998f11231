use kube::{api::DeleteParams, Api};
use tracing::{debug, warn};

use crate::{
    error::{Error, Result},
    service::Delete,
};

use super::{resource::ManagedResource, K8s};

impl Delete for K8s {
    async fn delete_resource<K: ManagedResource>(&self, name: &str) -> Result<()> {
        debug!("[Hi.Config] delete {} [{name}] in {}", K::kind_name(), self.namespace);
        let api: Api<K> = self.get_namespace_api();
        match api.delete(name, &DeleteParams::default()).await {
            // the object itself on a pending deletion, a status once it is gone
            Ok(deleted) => match deleted.right() {
                Some(status) if status.is_failure() => Err(Error::UnexpectedStatus {
                    kind: K::kind_name(),
                    name: name.to_string(),
                    reason: status.reason,
                    message: status.message,
                }),
                _ => Ok(()),
            },
            Err(kube::Error::Api(response)) if response.code == 404 => {
                warn!("[Hi.Config] {} [{name}] already gone", K::kind_name());
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }
}
