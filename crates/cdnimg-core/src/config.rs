use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/cdnimg/config.toml`.
///
/// Feeds the srcset layer and the CLI only; the URL normalizer itself reads
/// no configuration (the CDN hostname is a literal constant).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CdnimgConfig {
    /// Viewport-driven widths used for full-bleed responsive images.
    pub device_widths: Vec<u32>,
    /// Fixed widths used for icons and thumbnails.
    pub image_widths: Vec<u32>,
    /// Optional default quality hint forwarded to variant generation. The
    /// emitted quality directive is currently always `q_auto`.
    #[serde(default)]
    pub quality: Option<u8>,
}

impl Default for CdnimgConfig {
    fn default() -> Self {
        Self {
            device_widths: vec![640, 750, 828, 1080, 1200, 1920, 2048, 3840],
            image_widths: vec![16, 32, 48, 64, 96, 128, 256, 384],
            quality: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("cdnimg")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<CdnimgConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = CdnimgConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: CdnimgConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = CdnimgConfig::default();
        assert_eq!(
            cfg.device_widths,
            vec![640, 750, 828, 1080, 1200, 1920, 2048, 3840]
        );
        assert_eq!(cfg.image_widths, vec![16, 32, 48, 64, 96, 128, 256, 384]);
        assert!(cfg.quality.is_none());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = CdnimgConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: CdnimgConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.device_widths, cfg.device_widths);
        assert_eq!(parsed.image_widths, cfg.image_widths);
        assert_eq!(parsed.quality, cfg.quality);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            device_widths = [640, 1080]
            image_widths = [32, 64]
            quality = 80
        "#;
        let cfg: CdnimgConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.device_widths, vec![640, 1080]);
        assert_eq!(cfg.image_widths, vec![32, 64]);
        assert_eq!(cfg.quality, Some(80));
    }

    #[test]
    fn config_toml_quality_optional() {
        let toml = r#"
            device_widths = [640]
            image_widths = [32]
        "#;
        let cfg: CdnimgConfig = toml::from_str(toml).unwrap();
        assert!(cfg.quality.is_none());
    }
}
