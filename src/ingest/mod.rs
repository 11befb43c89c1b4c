/// External data sources.
///
/// Submodules:
/// - `waqi`: station readings and per-station feeds from api.waqi.info.
/// - `gistda`: flood layer tile URLs for GISTDA Sphere.

pub mod gistda;
pub mod waqi;
