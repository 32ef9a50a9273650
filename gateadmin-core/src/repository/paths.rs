//! Resource paths of the admin API.

use crate::transport::ResourcePath;

pub(crate) fn config() -> ResourcePath {
    ResourcePath::new(["config"])
}

pub(crate) fn config_names() -> ResourcePath {
    config().join("names")
}

pub(crate) fn config_item(gateway: &str) -> ResourcePath {
    config().join("item").join(gateway)
}

pub(crate) fn gateway(gateway: &str) -> ResourcePath {
    config_item(gateway).join("gateway")
}

pub(crate) fn route(gateway: &str, route: &str) -> ResourcePath {
    config_item(gateway).join("route").join("item").join(route)
}

pub(crate) fn route_names(gateway: &str) -> ResourcePath {
    config_item(gateway).join("route").join("names")
}

pub(crate) fn all_routes(gateway: &str) -> ResourcePath {
    config_item(gateway).join("route").join("all")
}

pub(crate) fn plugin() -> ResourcePath {
    config().join("plugin")
}

pub(crate) fn plugins_by_code(code: &str) -> ResourcePath {
    config().join("plugins").join(code)
}

pub(crate) fn all_plugins() -> ResourcePath {
    config().join("plugin-all")
}

pub(crate) fn catalog(leaf: &str) -> ResourcePath {
    ResourcePath::new(["plugin", leaf])
}

pub(crate) fn catalog_entry(leaf: &str, code: &str) -> ResourcePath {
    catalog(leaf).join(code)
}

pub(crate) fn login() -> ResourcePath {
    ResourcePath::new(["auth", "login"])
}

pub(crate) fn instance(leaf: &str) -> ResourcePath {
    ResourcePath::new(["discovery", "instance", leaf])
}

pub(crate) fn reload(kind: &str) -> ResourcePath {
    instance("reload").join(kind)
}

pub(crate) fn backends() -> ResourcePath {
    ResourcePath::new(["discovery", "backends"])
}
