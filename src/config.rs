// Runtime tuning: defaults, the optional inline JSON override and its validation.
use anyhow::{Context, bail};
use serde::{Deserialize, Serialize};

use crate::catalog::BackgroundId;

/// Id of the optional inline JSON block in `index.html` overriding [`Tuning`].
pub const TUNING_ELEMENT_ID: &str = "globe-tuning";

/// Timing and layout knobs. All durations are milliseconds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Interval of the single animation tick.
    pub tick_ms: f64,
    /// Offset from the shake trigger at which whiteout begins and objects scatter.
    pub whiteout_at_ms: f64,
    pub whiteout_end_ms: f64,
    /// Offset at which the globe accepts gestures again.
    pub settle_end_ms: f64,
    pub globe_snow_lifetime_ms: f64,
    /// How long a finished drag keeps suppressing the follow-up click.
    pub click_guard_ms: f64,
    pub save_notice_ms: f64,
    /// Drops closer than this to the rim are rejected.
    pub drop_margin_px: f64,
    pub initial_background: String,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            tick_ms: 100.0,
            whiteout_at_ms: 500.0,
            whiteout_end_ms: 1500.0,
            settle_end_ms: 2000.0,
            globe_snow_lifetime_ms: 6000.0,
            click_guard_ms: 100.0,
            save_notice_ms: 3000.0,
            drop_margin_px: 20.0,
            initial_background: BackgroundId::default().key().to_string(),
        }
    }
}

impl Tuning {
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        let tuning: Tuning = serde_json::from_str(raw).context("parsing globe tuning")?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if !(self.tick_ms > 0.0) {
            bail!("tick_ms must be positive, got {}", self.tick_ms);
        }
        if !(0.0 < self.whiteout_at_ms
            && self.whiteout_at_ms < self.whiteout_end_ms
            && self.whiteout_end_ms < self.settle_end_ms)
        {
            bail!(
                "shake offsets must increase: {} < {} < {}",
                self.whiteout_at_ms,
                self.whiteout_end_ms,
                self.settle_end_ms
            );
        }
        for (name, v) in [
            ("globe_snow_lifetime_ms", self.globe_snow_lifetime_ms),
            ("click_guard_ms", self.click_guard_ms),
            ("save_notice_ms", self.save_notice_ms),
            ("drop_margin_px", self.drop_margin_px),
        ] {
            if !(v >= 0.0) {
                bail!("{} must be non-negative, got {}", name, v);
            }
        }
        Ok(())
    }

    pub fn initial_background(&self) -> BackgroundId {
        BackgroundId::resolve(&self.initial_background)
    }
}

fn read_tuning_block() -> anyhow::Result<Option<String>> {
    let window = web_sys::window().context("no window")?;
    let document = window.document().context("no document")?;
    Ok(document.get_element_by_id(TUNING_ELEMENT_ID).and_then(|el| el.text_content()))
}

/// Tuning for this page: the inline override when present and valid,
/// defaults otherwise.
pub fn load_tuning() -> Tuning {
    match read_tuning_block() {
        Ok(Some(raw)) if !raw.trim().is_empty() => match Tuning::from_json(&raw) {
            Ok(t) => {
                log::info!("using tuning from #{}", TUNING_ELEMENT_ID);
                t
            }
            Err(e) => {
                log::warn!("ignoring #{}: {:#}", TUNING_ELEMENT_ID, e);
                Tuning::default()
            }
        },
        Ok(_) => Tuning::default(),
        Err(e) => {
            log::warn!("tuning lookup failed: {:#}", e);
            Tuning::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let t = Tuning::default();
        assert!(t.validate().is_ok());
        assert_eq!(t.whiteout_at_ms, 500.0);
        assert_eq!(t.whiteout_end_ms, 1500.0);
        assert_eq!(t.settle_end_ms, 2000.0);
        assert_eq!(t.globe_snow_lifetime_ms, 6000.0);
        assert_eq!(t.initial_background(), BackgroundId::Winter);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let t = Tuning::from_json(r#"{ "tick_ms": 50, "initial_background": "city" }"#).unwrap();
        assert_eq!(t.tick_ms, 50.0);
        assert_eq!(t.save_notice_ms, 3000.0);
        assert_eq!(t.initial_background(), BackgroundId::City);
    }

    #[test]
    fn unknown_background_key_resolves_to_first() {
        let t = Tuning::from_json(r#"{ "initial_background": "mars" }"#).unwrap();
        assert_eq!(t.initial_background(), BackgroundId::Winter);
    }

    #[test]
    fn out_of_order_offsets_are_rejected() {
        let err = Tuning::from_json(r#"{ "whiteout_at_ms": 1600 }"#).unwrap_err();
        assert!(format!("{:#}", err).contains("shake offsets"));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(Tuning::from_json("{ tick_ms: ").is_err());
        assert!(Tuning::from_json(r#"{ "tick_ms": 0 }"#).is_err());
        assert!(Tuning::from_json(r#"{ "drop_margin_px": -1 }"#).is_err());
    }
}
