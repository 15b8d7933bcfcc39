use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use std::time::Duration;

const SITE_TOML: &str = include_str!("../site.toml");

static CONFIG: OnceLock<SiteConfig> = OnceLock::new();

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct SiteConfig {
    pub site: SiteInfo,
    pub booking: BookingConfig,
    pub slider: SliderConfig,
    pub marquee: MarqueeConfig,
    pub menu: MenuConfig,
    pub images: ImageWidths,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteInfo {
    pub name: String,
    pub url: String,
    pub address: String,
    pub phone: String,
    pub email: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            name: "El Ensueño".to_string(),
            url: String::new(),
            address: "Playa La Ropa, Zihuatanejo, Guerrero, México".to_string(),
            phone: String::new(),
            email: String::new(),
        }
    }
}

/// Parameters of the hosted reservation engine
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BookingConfig {
    pub base_url: String,
    pub chain: String,
    pub hotel: String,
    pub currency: String,
    pub level: String,
    pub source: String,
    /// Room code that books the whole villa
    pub villa_room: String,
    /// Days from today until the suggested arrival
    pub lead_days: u32,
    pub nights: u32,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            base_url: "https://be.synxis.com/".to_string(),
            chain: "22402".to_string(),
            hotel: "78821".to_string(),
            currency: "USD".to_string(),
            level: "hotel".to_string(),
            source: "24C".to_string(),
            villa_room: "ENS".to_string(),
            lead_days: 1,
            nights: 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SliderConfig {
    pub hero_interval_ms: u64,
    pub about_interval_ms: u64,
    /// Zoom applied when a section lightbox opens
    pub lightbox_zoom: f64,
    pub suite_lightbox_zoom: f64,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            hero_interval_ms: 6500,
            about_interval_ms: 5000,
            lightbox_zoom: 2.5,
            suite_lightbox_zoom: 1.0,
        }
    }
}

impl SliderConfig {
    pub fn hero_interval(&self) -> Duration {
        Duration::from_millis(self.hero_interval_ms)
    }

    pub fn about_interval(&self) -> Duration {
        Duration::from_millis(self.about_interval_ms)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MarqueeConfig {
    pub speed_px: f64,
    pub frame_ms: u64,
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            speed_px: 1.5,
            frame_ms: 16,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MenuConfig {
    pub close_delay_ms: u64,
    pub anchor_scroll_delay_ms: u64,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            close_delay_ms: 200,
            anchor_scroll_delay_ms: 300,
        }
    }
}

/// Variant widths requested per image role
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ImageWidths {
    pub hero_widths: Vec<u32>,
    pub section_widths: Vec<u32>,
    pub card_widths: Vec<u32>,
}

impl Default for ImageWidths {
    fn default() -> Self {
        Self {
            hero_widths: vec![640, 1024, 1600, 2400],
            section_widths: vec![480, 800, 1200, 1600],
            card_widths: vec![320, 640],
        }
    }
}

impl SiteConfig {
    pub fn from_toml(s: &str) -> Result<Self, AppError> {
        Ok(toml::from_str(s)?)
    }
}

/// Site configuration, parsed once from the embedded `site.toml`
pub fn config() -> &'static SiteConfig {
    CONFIG.get_or_init(|| match SiteConfig::from_toml(SITE_TOML) {
        Ok(config) => {
            log::info!("loaded site configuration for {}", config.site.name);
            config
        }
        Err(e) => {
            log::error!("{}; using built-in defaults", e);
            SiteConfig::default()
        }
    })
}
