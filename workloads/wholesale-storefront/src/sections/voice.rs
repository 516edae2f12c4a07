//! Voice ordering panel.

use vendor_commerce::catalog::Language;
use vendor_commerce::session::VoiceSession;

/// Render the Voice tab for the current capture state.
pub fn render_voice_panel(voice: &VoiceSession, lang: Language) -> String {
    let badge = match lang {
        Language::Hi => "हिंदी",
        Language::Ta => "தமிழ்",
        _ => "English",
    };
    let (title, subtitle) = match lang {
        Language::Hi => ("आवाज़ सहायक", "अपनी भाषा में ऑर्डर करें"),
        _ => ("Voice Assistant", "Order in your language"),
    };

    let mic_block = match voice {
        VoiceSession::Listening { progress } => {
            let (prompt, processing) = match lang {
                Language::Hi => ("सुन रहा हूँ... बोलें", "आपकी आवाज़ को समझ रहा हूँ..."),
                _ => ("Listening... Speak now", "Processing your voice..."),
            };
            format!(
                r#"<button class="mic mic--listening">🎤</button>
        <p class="mic-prompt">{prompt}</p>
        <div class="voice-progress"><span>{processing}</span>
            <div class="progress-track"><div class="progress-fill" style="width: {progress}%"></div></div>
        </div>"#
            )
        }
        _ => {
            let (prompt, hint) = match lang {
                Language::Hi => ("बोलने के लिए टैप करें", "अपनी भाषा में ऑर्डर दें"),
                _ => ("Tap to speak your order", "Order in your preferred language"),
            };
            format!(
                r#"<button class="mic">🎤</button>
        <p class="mic-prompt">{prompt}</p>
        <p class="mic-hint">{hint}</p>"#
            )
        }
    };

    let order_block = match voice.order() {
        Some(order) => {
            let labels = match lang {
                Language::Hi => ["आपका ऑर्डर", "सुनें", "आपने कहा:", "अनुवाद:", "कार्ट में जोड़ें", "फिर से बोलें"],
                _ => ["Your Order", "Play", "You said:", "Translation:", "Add to Cart", "Speak Again"],
            };
            format!(
                r#"<div class="voice-order">
        <div class="voice-order-heading">
            <h3>{title}</h3>
            <button class="btn-play">🔊 {play}</button>
        </div>
        <div class="voice-transcript"><p>{said}</p><p class="transcript-text">{transcript}</p></div>
        <div class="voice-translation"><p>{translated}</p><p>"{translation}"</p></div>
        <div class="voice-actions">
            <button class="btn-add">{add}</button>
            <button class="btn-again">{again}</button>
        </div>
    </div>"#,
                title = labels[0],
                play = labels[1],
                said = labels[2],
                transcript = escape_html(&order.transcript),
                translated = labels[3],
                translation = escape_html(&order.translation),
                add = labels[4],
                again = labels[5]
            )
        }
        None => String::new(),
    };

    let features = render_feature_trio(lang);

    format!(
        r#"<section class="voice-panel" data-section="voice">
    <div class="voice-heading">
        <div><h2>💬 {title}</h2><p>{subtitle}</p></div>
        <span class="voice-language-badge">{badge}</span>
    </div>
    <div class="mic-stage">
        {mic_block}
    </div>
    {order_block}
    {features}
</section>"#
    )
}

fn render_feature_trio(lang: Language) -> String {
    let features: [(&str, &str, &str); 3] = match lang {
        Language::Hi => [
            ("💬", "बहुभाषी समर्थन", "6+ भाषाओं में ऑर्डर करें"),
            ("🎤", "स्मार्ट पहचान", "उच्च सटीकता के साथ"),
            ("🔊", "तुरंत प्रतिक्रिया", "तत्काल ऑर्डर पुष्टि"),
        ],
        _ => [
            ("💬", "Multi-language", "Order in 6+ languages"),
            ("🎤", "Smart Recognition", "High accuracy voice detection"),
            ("🔊", "Instant Response", "Immediate order confirmation"),
        ],
    };

    let cards: String = features
        .iter()
        .map(|(icon, name, detail)| {
            format!(
                r#"<div class="feature-card"><span class="feature-icon">{icon}</span><h4>{name}</h4><p>{detail}</p></div>"#
            )
        })
        .collect();

    format!(r#"<div class="feature-trio">{cards}</div>"#)
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_panel_shows_tap_prompt() {
        let html = render_voice_panel(&VoiceSession::Idle, Language::En);
        assert!(html.contains("Tap to speak your order"));
        assert!(html.contains("Order in 6+ languages"));
        assert!(!html.contains("voice-order"));
    }

    #[test]
    fn test_listening_panel_shows_progress() {
        let html = render_voice_panel(&VoiceSession::Listening { progress: 40 }, Language::En);
        assert!(html.contains("width: 40%"));
        assert!(html.contains("Listening... Speak now"));
    }

    #[test]
    fn test_captured_panel_shows_transcript_and_translation() {
        let mut voice = VoiceSession::new();
        voice.start();
        for _ in 0..11 {
            voice.tick();
        }
        let html = render_voice_panel(&voice, Language::Hi);
        assert!(html.contains("मुझे 10 किलो प्याज और 5 किलो टमाटर चाहिए"));
        assert!(html.contains("I need 10 kg onions and 5 kg tomatoes"));
        assert!(html.contains("आपका ऑर्डर"));
    }
}
