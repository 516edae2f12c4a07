//! Voice ordering stub and speech parameters.
//!
//! There is no microphone and no recognizer. Starting a voice session
//! runs a progress bar; when it fills, a hard-coded Hindi transcript and
//! its English translation appear, along with the draft order lines the
//! "recognizer" heard.

use crate::catalog::{Language, Product};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Interval between capture progress ticks.
pub const VOICE_TICK: Duration = Duration::from_millis(300);

/// Progress added per tick.
pub const VOICE_PROGRESS_STEP: u8 = 10;

const CANNED_TRANSCRIPT: &str = "मुझे 10 किलो प्याज और 5 किलो टमाटर चाहिए";
const CANNED_TRANSLATION: &str = "I need 10 kg onions and 5 kg tomatoes";

/// One product mention heard in the voice order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceDraftLine {
    /// Keyword to match against catalog names.
    pub product_keyword: String,
    /// Units requested.
    pub quantity: u32,
}

/// A captured voice order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceOrder {
    /// What the vendor said, as recognized.
    pub transcript: String,
    /// English translation of the transcript.
    pub translation: String,
    /// Draft lines parsed from the transcript.
    pub lines: Vec<VoiceDraftLine>,
}

impl VoiceOrder {
    /// The one order the stub recognizer ever hears.
    pub fn canned() -> Self {
        Self {
            transcript: CANNED_TRANSCRIPT.to_string(),
            translation: CANNED_TRANSLATION.to_string(),
            lines: vec![
                VoiceDraftLine {
                    product_keyword: "onions".to_string(),
                    quantity: 10,
                },
                VoiceDraftLine {
                    product_keyword: "tomatoes".to_string(),
                    quantity: 5,
                },
            ],
        }
    }

    /// Match draft lines against the catalog by English name.
    ///
    /// Keywords match case-insensitively as substrings; lines that match
    /// nothing are skipped.
    pub fn resolve<'a>(&self, catalog: &'a [Product]) -> Vec<(&'a Product, u32)> {
        self.lines
            .iter()
            .filter_map(|line| {
                let keyword = line.product_keyword.to_lowercase();
                catalog
                    .iter()
                    .find(|p| p.name.en.to_lowercase().contains(&keyword))
                    .map(|p| (p, line.quantity))
            })
            .collect()
    }
}

/// The microphone stub's state machine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub enum VoiceSession {
    #[default]
    Idle,
    /// Capturing, with progress 0–100.
    Listening { progress: u8 },
    /// Capture finished; the canned order is available.
    Captured { order: VoiceOrder },
}

impl VoiceSession {
    pub fn new() -> Self {
        VoiceSession::Idle
    }

    /// Start listening. Restarts from zero if already listening.
    pub fn start(&mut self) {
        *self = VoiceSession::Listening { progress: 0 };
    }

    /// Advance one tick. The tick after progress fills captures the
    /// canned order. Returns true once captured.
    pub fn tick(&mut self) -> bool {
        match self {
            VoiceSession::Listening { progress } if *progress >= 100 => {
                *self = VoiceSession::Captured {
                    order: VoiceOrder::canned(),
                };
                true
            }
            VoiceSession::Listening { progress } => {
                *progress = progress.saturating_add(VOICE_PROGRESS_STEP).min(100);
                false
            }
            _ => matches!(self, VoiceSession::Captured { .. }),
        }
    }

    /// Stop and reset without capturing.
    pub fn cancel(&mut self) {
        *self = VoiceSession::Idle;
    }

    pub fn is_listening(&self) -> bool {
        matches!(self, VoiceSession::Listening { .. })
    }

    /// Capture progress while listening.
    pub fn progress(&self) -> Option<u8> {
        match self {
            VoiceSession::Listening { progress } => Some(*progress),
            _ => None,
        }
    }

    /// The captured order, once available.
    pub fn order(&self) -> Option<&VoiceOrder> {
        match self {
            VoiceSession::Captured { order } => Some(order),
            _ => None,
        }
    }
}

/// Speech-synthesis parameters for reading a product name aloud.
///
/// A data-only stand-in for the device speech API; nothing is played.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Utterance {
    /// Text to speak.
    pub text: String,
    /// BCP-47 voice tag (e.g., "hi-IN").
    pub lang_tag: String,
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
}

impl Utterance {
    /// Read a product's name in the given language.
    pub fn for_product(product: &Product, lang: Language) -> Self {
        Self {
            text: product.display_name(lang).to_string(),
            lang_tag: lang.speech_tag().to_string(),
            rate: 0.8,
            pitch: 1.0,
            volume: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{LocalizedName, ProductCategory};
    use crate::money::Money;

    fn catalog() -> Vec<Product> {
        vec![
            Product::new(
                "1",
                LocalizedName::new("Fresh Onions", "ताज़ा प्याज", "வெங்காயம்"),
                Money::from_rupees(25),
                Money::from_rupees(30),
                "per kg",
                4.5,
                ProductCategory::Vegetables,
                "🧅",
            ),
            Product::new(
                "2",
                LocalizedName::new("Ripe Tomatoes", "पके टमाटर", "தக்காளி"),
                Money::from_rupees(40),
                Money::from_rupees(35),
                "per kg",
                4.2,
                ProductCategory::Vegetables,
                "🍅",
            ),
        ]
    }

    #[test]
    fn test_session_captures_after_progress_fills() {
        let mut session = VoiceSession::new();
        session.start();
        assert!(session.is_listening());
        assert_eq!(session.progress(), Some(0));

        // Ten ticks fill the bar, the eleventh captures.
        for _ in 0..10 {
            assert!(!session.tick());
        }
        assert_eq!(session.progress(), Some(100));
        assert!(session.tick());

        let order = session.order().unwrap();
        assert_eq!(order.transcript, CANNED_TRANSCRIPT);
        assert_eq!(order.translation, CANNED_TRANSLATION);
    }

    #[test]
    fn test_cancel_resets() {
        let mut session = VoiceSession::new();
        session.start();
        session.tick();
        session.cancel();
        assert_eq!(session, VoiceSession::Idle);
        assert_eq!(session.progress(), None);
    }

    #[test]
    fn test_restart_while_listening_zeroes_progress() {
        let mut session = VoiceSession::new();
        session.start();
        session.tick();
        session.tick();
        session.start();
        assert_eq!(session.progress(), Some(0));
    }

    #[test]
    fn test_canned_order_resolves_against_catalog() {
        let catalog = catalog();
        let resolved = VoiceOrder::canned().resolve(&catalog);
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[0].0.name.en, "Fresh Onions");
        assert_eq!(resolved[0].1, 10);
        assert_eq!(resolved[1].0.name.en, "Ripe Tomatoes");
        assert_eq!(resolved[1].1, 5);
    }

    #[test]
    fn test_unknown_keywords_are_skipped() {
        let catalog = catalog();
        let mut order = VoiceOrder::canned();
        order.lines.push(VoiceDraftLine {
            product_keyword: "saffron".to_string(),
            quantity: 1,
        });
        assert_eq!(order.resolve(&catalog).len(), 2);
    }

    #[test]
    fn test_utterance_parameters() {
        let catalog = catalog();
        let utterance = Utterance::for_product(&catalog[0], Language::Hi);
        assert_eq!(utterance.text, "ताज़ा प्याज");
        assert_eq!(utterance.lang_tag, "hi-IN");
        assert_eq!(utterance.rate, 0.8);
        assert_eq!(utterance.pitch, 1.0);
        assert_eq!(utterance.volume, 1.0);

        let utterance = Utterance::for_product(&catalog[0], Language::Te);
        assert_eq!(utterance.lang_tag, "en-IN");
    }
}
