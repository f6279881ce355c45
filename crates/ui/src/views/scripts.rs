use vocab_core::Outcome;

/// Feedback tone for a grading: a soft sine blip whose pitch rises with
/// the outcome. Again/Good/Easy map to 220/440/660 Hz.
pub(super) fn outcome_tone_script(outcome: Outcome) -> String {
    let frequency = match outcome {
        Outcome::Again => 220,
        Outcome::Good => 440,
        Outcome::Easy => 660,
    };
    tone_script("sine", frequency, 0.15, 0.02, 0.2, 0.22)
}

/// Short square-wave click for plain navigation (Back/Skip).
pub(super) fn click_tone_script() -> String {
    tone_script("square", 520, 0.12, 0.01, 0.08, 0.09)
}

/// One-shot oscillator through a gain envelope on a shared AudioContext.
/// Gain ramps are exponential, so the floor is a near-zero positive value
/// rather than 0.
fn tone_script(
    wave: &str,
    frequency: u32,
    peak: f64,
    attack_secs: f64,
    release_secs: f64,
    stop_secs: f64,
) -> String {
    format!(
        r#"(function() {{
            const AudioContext = window.AudioContext ?? window.webkitAudioContext;
            if (!AudioContext) {{
                return;
            }}
            const ctx = window.__vocabAudioCtx || (window.__vocabAudioCtx = new AudioContext());
            const oscillator = ctx.createOscillator();
            const gain = ctx.createGain();
            oscillator.type = "{wave}";
            oscillator.frequency.value = {frequency};
            oscillator.connect(gain);
            gain.connect(ctx.destination);
            const now = ctx.currentTime;
            gain.gain.setValueAtTime(0.0001, now);
            gain.gain.exponentialRampToValueAtTime({peak}, now + {attack_secs});
            gain.gain.exponentialRampToValueAtTime(0.0001, now + {release_secs});
            oscillator.start(now);
            oscillator.stop(now + {stop_secs});
        }})();"#
    )
}

#[cfg(test)]
mod tests {
    use vocab_core::Outcome;

    use super::{click_tone_script, outcome_tone_script};

    #[test]
    fn outcome_tones_rise_with_the_grade() {
        assert!(outcome_tone_script(Outcome::Again).contains("= 220;"));
        assert!(outcome_tone_script(Outcome::Good).contains("= 440;"));
        assert!(outcome_tone_script(Outcome::Easy).contains("= 660;"));
        assert!(outcome_tone_script(Outcome::Good).contains("\"sine\""));
    }

    #[test]
    fn click_is_a_short_square_blip() {
        let js = click_tone_script();
        assert!(js.contains("\"square\""));
        assert!(js.contains("= 520;"));
        assert!(js.contains("now + 0.09"));
    }
}
