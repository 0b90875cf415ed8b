//! Single speak/listen turns, and the bounded-retry listen.
//!
//! Nothing here returns an error: speech failures are logged and mapped to
//! silence so the dialogue always moves on.

use tracing::{debug, warn};

use crate::dialogue::script::REPEAT_PLEASE;
use crate::speech::{is_no_signal, Heard, ListenParams, NoSignal, VoiceIo};

/// Listen attempts per retrying turn.
pub const MAX_LISTEN_ATTEMPTS: u32 = 3;

/// Speaks `text`, logging (and otherwise ignoring) failures.
pub async fn say(voice: &dyn VoiceIo, text: &str) {
    if let Err(e) = voice.speak(text).await {
        warn!("Speak failed, continuing: {e}");
    }
}

/// One listen. Device errors become [`NoSignal::ServiceError`], and speech
/// whose text is a sentinel phrase becomes [`NoSignal::Unrecognized`].
pub async fn listen_once(voice: &dyn VoiceIo, params: ListenParams) -> Heard {
    match voice.listen(params).await {
        Ok(Heard::Speech(text)) if is_no_signal(&text) => Heard::Silence(NoSignal::Unrecognized),
        Ok(heard) => heard,
        Err(e) => {
            warn!("Listen failed: {e}");
            Heard::Silence(NoSignal::ServiceError)
        }
    }
}

/// Up to [`MAX_LISTEN_ATTEMPTS`] listens, asking the candidate to repeat
/// between attempts. Returns the first usable reply, or
/// `Silence(NoSignal::NoResponse)` once every attempt is spent.
pub async fn listen_with_retry(voice: &dyn VoiceIo, params: ListenParams, context: &str) -> Heard {
    for attempt in 1..=MAX_LISTEN_ATTEMPTS {
        let heard = listen_once(voice, params).await;
        if let Heard::Speech(_) = heard {
            return heard;
        }

        debug!(
            "No usable reply for {context} (attempt {attempt}/{MAX_LISTEN_ATTEMPTS}): {}",
            heard.as_str()
        );
        if attempt < MAX_LISTEN_ATTEMPTS {
            say(voice, REPEAT_PLEASE).await;
        }
    }

    warn!("No response for {context} after {MAX_LISTEN_ATTEMPTS} attempts");
    Heard::Silence(NoSignal::NoResponse)
}
