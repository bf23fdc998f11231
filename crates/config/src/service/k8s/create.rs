use kube::{api::PostParams, Api, ResourceExt as _};
use tracing::debug;

use crate::{
    error::{Error, Result},
    service::Create,
};

use super::{
    resource::{render_default, ManagedResource},
    K8s,
};

impl Create for K8s {
    async fn create_resource<K: ManagedResource>(&self, mut object: K) -> Result<K> {
        render_default(&mut object, &self.namespace, self.options());
        let name = object.name_any();
        debug!("[Hi.Config] create {} [{name}] in {}", K::kind_name(), self.namespace);

        let api: Api<K> = self.get_namespace_api();
        api.create(&PostParams::default(), &object).await.map_err(|e| Error::from_write(e, &K::kind_name(), &name))
    }
}
