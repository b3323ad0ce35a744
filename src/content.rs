// Static marketing content for the Home tab.
// The artist's copy lives here; nothing in this module talks to the backend.

/// Artist profile shown in the hero and about sections.
pub struct Profile {
    pub name: &'static str,
    pub tagline: &'static str,
    pub location: &'static str,
    pub availability: &'static str,
    pub about: &'static str,
    pub whatsapp_number: &'static str,
    pub instagram_id: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Jeeva K",
    tagline: "Anime sketches and pencil portraits.",
    location: "India,TN",
    availability: "Run by Sketchwew",
    about: "I like to draw anime characters and human potraits. Pencil sketches \
            and portraits are my favorite. I also do custom commissions. I have \
            been drawing for many years and have a collection of 5+ sketchbooks \
            filled with my art.Check out my Instagram(@sketchwew) for more of my \
            work and updates.",
    whatsapp_number: "9952859522",
    instagram_id: "sketchwew",
};

/// Stat counter shown under the hero.
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

pub const STATS: [Stat; 3] = [
    Stat {
        label: "Anime Sketches",
        value: "80+",
    },
    Stat {
        label: "Human Portraits",
        value: "50+",
    },
    Stat {
        label: "Sketchbooks",
        value: "5+",
    },
];

/// One step of the commission process.
pub struct ProcessStep {
    pub step: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

pub const PROCESS: [ProcessStep; 4] = [
    ProcessStep {
        step: "01",
        title: "Mood Board",
        text: "We gather references and decide on vibe, color, and emotion.",
    },
    ProcessStep {
        step: "02",
        title: "Line Sketch",
        text: "Loose anime linework, pose variations, and composition flow.",
    },
    ProcessStep {
        step: "03",
        title: "Hatch Shading",
        text: "Gentle values, subtle blush, and clean details.",
    },
    ProcessStep {
        step: "04",
        title: "Final Touches",
        text: "Glow, texture, and export in high resolution.",
    },
];

pub const HIGHLIGHTS: [&str; 3] = [
    "Soft anime portraits with delicate linework",
    "Cozy background studies and gentle lighting",
    "Custom commissions for characters and scenes",
];
