//! The deck contents. Ids are stable: persisted selections reference them
//! across releases, so existing ids must never be renamed or reused.

use super::{Card, CardLine, SizeClass};

const fn line(text: &'static str) -> CardLine {
    CardLine { text, size: None }
}

const fn sized(text: &'static str, size: SizeClass) -> CardLine {
    CardLine {
        text,
        size: Some(size),
    }
}

const fn card(id: &'static str, lines: &'static [CardLine]) -> Card {
    Card { id, lines }
}

pub static NEEDS: &[Card] = &[
    card("n1", &[line("autonomy")]),
    card("n2", &[line("choice"), line("freedom")]),
    card("n3", &[line("independence")]),
    card("n4", &[line("space")]),
    card("n5", &[line("spontaneity")]),
    card("n6", &[line("acceptance")]),
    card("n7", &[line("affection"), line("warmth")]),
    card("n8", &[line("appreciation")]),
    card("n9", &[line("belonging"), line("community")]),
    card("n10", &[line("closeness"), line("intimacy")]),
    card("n11", &[line("companionship")]),
    card("n12", &[line("compassion")]),
    card("n13", &[line("consideration")]),
    card("n14", &[line("empathy")]),
    card("n15", &[line("love")]),
    card("n16", &[line("mutuality")]),
    card("n17", &[line("respect"), line("self-respect")]),
    card("n18", &[line("safety"), line("security")]),
    card("n19", &[line("stability")]),
    card("n20", &[line("support")]),
    card("n21", &[sized("to see and be seen", SizeClass::Medium)]),
    card("n22", &[sized("to know and be known", SizeClass::Medium)]),
    card("n23", &[line("trust")]),
    card("n24", &[line("honesty"), line("authenticity")]),
    card("n25", &[line("integrity")]),
    card("n26", &[line("presence")]),
    card("n27", &[line("play"), line("humor")]),
    card("n28", &[line("joy")]),
    card("n29", &[line("peace"), line("ease"), line("harmony")]),
    card("n30", &[line("beauty")]),
    card("n31", &[line("equality")]),
    card("n32", &[line("inspiration")]),
    card("n33", &[line("order")]),
    card("n34", &[line("rest"), line("sleep")]),
    card("n35", &[line("food"), line("water")]),
    card("n36", &[line("movement"), line("exercise")]),
    card("n37", &[line("touch")]),
    card("n38", &[line("shelter")]),
    card("n39", &[sized("celebration of life", SizeClass::Medium)]),
    card("n40", &[line("challenge")]),
    card("n41", &[line("clarity")]),
    card("n42", &[line("competence")]),
    card("n43", &[line("contribution")]),
    card("n44", &[line("creativity")]),
    card("n45", &[line("discovery")]),
    card("n46", &[line("growth"), line("learning")]),
    card("n47", &[line("hope")]),
    card("n48", &[line("meaning"), line("purpose")]),
    card("n49", &[line("mourning")]),
    card("n50", &[line("participation")]),
    card("n51", &[line("self-expression")]),
    card("n52", &[line("understanding")]),
];

pub static FEELINGS: &[Card] = &[
    // Feelings when needs are met
    card("f1", &[line("happy"), line("glad"), line("delighted")]),
    card("f2", &[line("joyful")]),
    card("f3", &[line("grateful"), line("thankful")]),
    card("f4", &[line("hopeful"), line("encouraged")]),
    card("f5", &[line("confident")]),
    card("f6", &[line("calm"), line("relaxed"), line("at ease")]),
    card("f7", &[line("peaceful"), line("serene")]),
    card("f8", &[line("content"), line("satisfied")]),
    card("f9", &[line("curious"), line("interested")]),
    card("f10", &[line("fascinated")]),
    card("f11", &[line("inspired")]),
    card("f12", &[line("energetic"), line("lively")]),
    card("f13", &[line("excited"), line("eager")]),
    card("f14", &[line("enthusiastic")]),
    card("f15", &[line("moved"), line("touched")]),
    card("f16", &[line("tender"), line("warm")]),
    card("f17", &[line("loving"), line("affectionate")]),
    card("f18", &[line("proud")]),
    card("f19", &[line("relieved")]),
    card("f20", &[line("refreshed"), line("rested")]),
    card("f21", &[line("amazed"), line("astonished")]),
    card("f22", &[line("playful")]),
    // Feelings when needs are not met
    card("f23", &[line("sad"), line("unhappy")]),
    card("f24", &[line("lonely")]),
    card("f25", &[line("hurt")]),
    card("f26", &[line("disappointed")]),
    card("f27", &[line("discouraged"), line("disheartened")]),
    card("f28", &[line("hopeless")]),
    card("f29", &[line("tired"), line("exhausted"), line("weary")]),
    card("f30", &[line("angry"), line("furious")]),
    card("f31", &[line("irritated"), line("annoyed")]),
    card("f32", &[line("frustrated")]),
    card("f33", &[line("resentful"), line("bitter")]),
    card("f34", &[line("afraid"), line("scared")]),
    card("f35", &[line("anxious"), line("worried")]),
    card("f36", &[line("nervous"), line("tense")]),
    card("f37", &[sized("overwhelmed", SizeClass::Large)]),
    card("f38", &[line("confused"), line("puzzled")]),
    card("f39", &[line("torn"), line("ambivalent")]),
    card("f40", &[line("embarrassed"), line("ashamed")]),
    card("f41", &[line("guilty")]),
    card("f42", &[line("jealous"), line("envious")]),
    card("f43", &[line("bored")]),
    card("f44", &[line("restless"), line("impatient")]),
    card("f45", &[line("numb"), line("withdrawn")]),
    card("f46", &[sized("uncomfortable, uneasy", SizeClass::Small)]),
    card("f47", &[line("suspicious"), line("wary")]),
    card("f48", &[line("shocked"), line("startled")]),
];
