use kube::{api::PostParams, Api, Resource as _};
use tracing::debug;

use crate::{
    error::{Error, Result},
    service::Update,
};

use super::{
    resource::{render_default, ManagedResource},
    K8s,
};

impl Update for K8s {
    async fn replace_resource<K: ManagedResource>(&self, mut object: K) -> Result<K> {
        let Some(name) = object.meta().name.clone().filter(|n| !n.is_empty()) else {
            return Err(Error::InvalidArgument(format!("{} to replace has no metadata.name", K::kind_name())));
        };
        render_default(&mut object, &self.namespace, self.options());
        debug!("[Hi.Config] replace {} [{name}] in {}", K::kind_name(), self.namespace);

        let api: Api<K> = self.get_namespace_api();
        api.replace(&name, &PostParams::default(), &object).await.map_err(|e| Error::from_write(e, &K::kind_name(), &name))
    }
}
