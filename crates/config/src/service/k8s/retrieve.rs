use kube::{api::ListParams, Api};
use tracing::{debug, error};

use crate::{error::Result, service::Retrieve};

use super::{
    resource::{sort_by_name, ManagedResource},
    selector::owned_label_selector,
    K8s,
};

impl Retrieve for K8s {
    async fn list_resources<K: ManagedResource>(&self, label_selectors: &[String], field_selector: Option<&str>) -> Result<Vec<K>> {
        let label_selector = owned_label_selector(label_selectors);
        let mut params = ListParams::default().labels(&label_selector);
        if let Some(field_selector) = field_selector.filter(|f| !f.is_empty()) {
            params = params.fields(field_selector);
        }
        debug!("[Hi.Config] list {} in {} by [{label_selector}]", K::kind_name(), self.namespace);

        let api: Api<K> = self.get_namespace_api();
        let list = api.list(&params).await.inspect_err(|e| match e {
            kube::Error::Api(response) => error!(
                "[Hi.Config] fail to list {} by [{label_selector}] fields [{}]: code={} reason={} message={}",
                K::kind_name(),
                field_selector.unwrap_or_default(),
                response.code,
                response.reason,
                response.message
            ),
            e => error!("[Hi.Config] fail to list {} by [{label_selector}]: {e}", K::kind_name()),
        })?;

        let mut items = list.items;
        sort_by_name(&mut items);
        Ok(items)
    }

    async fn read_resource<K: ManagedResource>(&self, name: &str) -> Result<Option<K>> {
        debug!("[Hi.Config] read {} [{name}] in {}", K::kind_name(), self.namespace);
        let api: Api<K> = self.get_namespace_api();
        Ok(api.get_opt(name).await?)
    }
}
