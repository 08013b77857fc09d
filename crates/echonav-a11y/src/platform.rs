//! Platform Detection
//!
//! Classifies the host OS family once, to pick a voice-resolution strategy.

/// Host OS family as far as voice selection cares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Platform {
    /// iOS / iPadOS, including iPadOS in desktop-class mode
    IosLike,
    #[default]
    Other,
}

/// Host identification strings (`navigator.userAgent`, `navigator.platform`)
#[derive(Debug, Clone, Default)]
pub struct HostInfo {
    pub user_agent: String,
    pub platform: String,
    /// Touch points reported by the host; iPadOS masquerades as `MacIntel`
    pub max_touch_points: u32,
}

impl HostInfo {
    pub fn new(user_agent: impl Into<String>, platform: impl Into<String>, max_touch_points: u32) -> Self {
        Self { user_agent: user_agent.into(), platform: platform.into(), max_touch_points }
    }
}

const IOS_DEVICES: [&str; 3] = ["iphone", "ipad", "ipod"];

impl Platform {
    pub fn detect(host: &HostInfo) -> Self {
        let user_agent = host.user_agent.to_lowercase();
        let platform = host.platform.to_lowercase();

        let mobile = IOS_DEVICES.iter().any(|device| user_agent.contains(device));
        let desktop_class_ipad = platform == "macintel" && host.max_touch_points > 1;

        if mobile || desktop_class_ipad { Self::IosLike } else { Self::Other }
    }

    pub fn is_ios_like(&self) -> bool {
        matches!(self, Self::IosLike)
    }
}
