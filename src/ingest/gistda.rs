/// GISTDA Sphere flood layer.
///
/// The daily flood extent is served as WMTS tiles. The map requests tiles
/// through a same-origin proxy prefix, which forwards to the Sphere
/// services host. This module only builds those URLs; tile fetching and
/// drawing belong to the map engine.

use crate::config::FloodConfig;
use crate::logging::{self, DataSource};

const TILE_MATRIX_SET: &str = "EPSG:900913";

/// WMTS tile URL template with `{z}`, `{x}`, `{y}` placeholders.
///
/// Returns `None` (and logs a warning) when no GISTDA key is configured;
/// the flood toggle is then unavailable rather than broken.
pub fn flood_tile_template(config: &FloodConfig) -> Option<String> {
    let Some(key) = config.key.as_deref() else {
        logging::warn(DataSource::Gistda, None, "Flood layer: missing API key (set GISTDA_KEY)");
        return None;
    };

    Some(format!(
        "{}/wmts?key={}&layer={}&style=default&tilematrixset={}&Service=WMTS&Request=GetTile&Version=1.0.0&Format=image/png&TileMatrix={{z}}&TileCol={{x}}&TileRow={{y}}",
        config.proxy_prefix.trim_end_matches('/'),
        key,
        config.layer,
        TILE_MATRIX_SET,
    ))
}

/// Rewrites a proxied request path to its upstream URL.
///
/// `/gistda-proxy/wmts?x=1` becomes `https://sphere.gistda.or.th/services/wmts?x=1`.
/// Paths outside the proxy prefix return `None`.
pub fn upstream_url(config: &FloodConfig, request_path: &str) -> Option<String> {
    let prefix = config.proxy_prefix.trim_end_matches('/');
    let rest = request_path.strip_prefix(prefix)?;
    let rest = match rest.strip_prefix('/') {
        Some(r) => r,
        None if rest.is_empty() => "",
        None => return None, // "/gistda-proxyfoo" is not under the prefix
    };
    Some(format!("{}/{}", config.upstream_url.trim_end_matches('/'), rest))
}

/// Fills the `{z}/{x}/{y}` placeholders of a tile template.
pub fn tile_url(template: &str, z: u32, x: u32, y: u32) -> String {
    template
        .replace("{z}", &z.to_string())
        .replace("{x}", &x.to_string())
        .replace("{y}", &y.to_string())
}
