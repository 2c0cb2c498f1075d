//! Static presentation copy for the tour and features screens, plus the
//! mascot art. All of it is decorative; none of it feeds the chat.

pub struct TourSection {
    pub kicker: &'static str,
    pub title: &'static [&'static str],
    pub body: &'static str,
}

pub const BRAND: &str = "GOGO";

pub const NAV_LINKS: [&str; 4] = ["Experience", "World", "Collectibles", "Community"];

pub const VERSION_BADGE: &str = "INTRODUCING VERSION 2.0";

pub const TAGLINE: &str = "Meet GOGO, your hyper-curious mascot designed to bridge the gap \
between imagination and reality in the digital realm.";

pub const SECTIONS: [TourSection; 4] = [
    TourSection {
        kicker: "SYSTEM SEQUENCE ACTIVE",
        title: &["HELLO,", "I'M GOGO."],
        body: "Your cinematic guide to the spatial intersection of curiosity and intelligence.",
    },
    TourSection {
        kicker: "",
        title: &["FIXED", "SCALE."],
        body: "Zoom is disabled for a focused cinematic experience. Rotate freely without \
changing distance.",
    },
    TourSection {
        kicker: "",
        title: &["VIVID", "WORLD."],
        body: "Where data flows into form and curiosity fuels the engine of discovery.",
    },
    TourSection {
        kicker: "",
        title: &["READY TO", "BEGIN?"],
        body: "Press t to talk to GOGO.",
    },
];

/// (label, value) cards shown in the final tour section.
pub const STAT_CARDS: [(&str, &str); 2] = [
    ("CORE INTEGRITY", "100% Stable"),
    ("NEURAL LINK", "Gemini Active"),
];

pub const FOOTER: &str = "END OF TRANSMISSION";

/// (label, value) attributes floating beside the mascot.
pub const ATTRIBUTES: [(&str, &str); 3] = [
    ("CONSTELLATION", "Aquarius"),
    ("CHARACTER", "Infinite Energy"),
    ("PERSONALITY", "Optimistic"),
];

pub const FEATURES_TITLE: &str = "Infinite possibilities with GOGO";

pub const FEATURES_SUBTITLE: &str = "GOGO isn't just a mascot. It's an ecosystem of \
interactive components, 3D assets, and emotional intelligence.";

pub const FEATURES: [(&str, &str); 3] = [
    (
        "Emotional AI",
        "Powered by the latest GenAI models, GOGO reacts to your input with unique \
animations and expressions.",
    ),
    (
        "3D Asset Library",
        "Access thousands of high-quality rounded 3D models specifically designed to \
match GOGO's aesthetic.",
    ),
    (
        "Social Hub",
        "Join a community of explorers discovering new digital frontiers alongside \
their GOGO companions.",
    ),
];

/// Terminal stand-in for the 3D model. Three frames, cycled on the tick,
/// give the idle bob; the blink frame lands every third beat.
pub const MASCOT_FRAMES: [&str; 3] = [
    r#"        /\
       /  \
   .-~~~~~~-.
  /          \
 |   o    o   |
 |    \__/    |
  \          /
  _|~~~~~~~~|_
    |  ..  |
    '-.__.-'"#,
    r#"        /\
       /  \
   .-~~~~~~-.
  /          \
 |   -    -   |
 |    \__/    |
  \          /
  _|~~~~~~~~|_
    |  ..  |
    '-.__.-'"#,
    r#"        /\
       /  \
   .-~~~~~~-.
  /          \
 |   o    o   |
 |     __     |
  \          /
  _|~~~~~~~~|_
    |  ..  |
    '-.__.-'"#,
];

/// Vertical parallax for the mascot panel: the model drifts up as the page
/// scrolls down, at 6% of the scroll distance, mirroring the web build.
pub fn parallax_lift(scroll: u16) -> u16 {
    (f32::from(scroll) * 0.06).round() as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallax_lift_tracks_scroll() {
        assert_eq!(parallax_lift(0), 0);
        assert_eq!(parallax_lift(50), 3);
        assert_eq!(parallax_lift(100), 6);
    }

    #[test]
    fn test_mascot_frames_share_height() {
        let heights: Vec<usize> = MASCOT_FRAMES.iter().map(|f| f.lines().count()).collect();
        assert!(heights.iter().all(|&h| h == heights[0]));
    }
}
