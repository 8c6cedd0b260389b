//! Static page content
//!
//! Everything the landing page shows that is not derived from user input.

use std::time::Duration;

use palette::Srgb;

/// Hero banner copy
#[derive(Debug, Clone, Copy)]
pub struct Hero {
    pub eyebrow: &'static str,
    pub headline: &'static str,
    pub blurb: &'static str,
    pub cta: &'static str,
    pub badge: &'static str,
}

pub const HERO: Hero = Hero {
    eyebrow: "Welcome to Candy Heaven",
    headline: "The most outrageous sweets universe you can taste without a spacesuit.",
    blurb: "Our sugar scientists engineer kaleidoscopic confections, hovering lollipops, \
            and confetti-powered candy that makes every celebration explode with flavor.",
    cta: "Tap for Confetti Candy",
    badge: "Mega mix drops nightly",
};

/// Candies orbiting the hero banner
pub const HERO_CANDY: [Srgb<u8>; 8] = [
    Srgb::new(0xFF, 0x14, 0x93),
    Srgb::new(0xFF, 0xB6, 0xC1),
    Srgb::new(0xFF, 0x69, 0xB4),
    Srgb::new(0x00, 0xCE, 0xD1),
    Srgb::new(0x7B, 0x68, 0xEE),
    Srgb::new(0xFF, 0xDF, 0x00),
    Srgb::new(0xFF, 0x63, 0x47),
    Srgb::new(0x20, 0xB2, 0xAA),
];

/// Hero candies pop in one after another after this initial pause
const HERO_CANDY_LEAD_IN: Duration = Duration::from_millis(400);
const HERO_CANDY_STAGGER: Duration = Duration::from_millis(140);

/// When the hero candy at `index` starts to appear
pub fn hero_candy_delay(index: usize) -> Duration {
    HERO_CANDY_LEAD_IN + HERO_CANDY_STAGGER * index as u32
}

/// A jar in the tasting flight
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Jar {
    pub id: &'static str,
    pub name: &'static str,
    pub flavor: &'static str,
    pub description: &'static str,
    pub sweets: [Srgb<u8>; 4],
}

pub const JARS: [Jar; 3] = [
    Jar {
        id: "nebula-nibbles",
        name: "Nebula Nibbles",
        flavor: "Cosmic Berry Swirl",
        description: "A galaxy of popping candy clusters that shimmer and sparkle with every bite.",
        sweets: [
            Srgb::new(0x83, 0x38, 0xEC),
            Srgb::new(0xFF, 0x14, 0x93),
            Srgb::new(0xFB, 0x56, 0x07),
            Srgb::new(0xFF, 0xB6, 0xC1),
        ],
    },
    Jar {
        id: "glow-glaze",
        name: "Glow Glaze Gems",
        flavor: "Electric Citrus",
        description: "Translucent gems that crackle into citrus fizz and rainbow sugar dust.",
        sweets: [
            Srgb::new(0xFF, 0xBE, 0x0B),
            Srgb::new(0x00, 0xD9, 0xFF),
            Srgb::new(0x3A, 0x86, 0xFF),
            Srgb::new(0x7B, 0x68, 0xEE),
        ],
    },
    Jar {
        id: "bubble-bonanza",
        name: "Bubble Bonanza",
        flavor: "Tropical Bubbleblast",
        description: "Chewy spheres bursting with tropical mist and a shower of glitter sprinkles.",
        sweets: [
            Srgb::new(0xFF, 0x69, 0xB4),
            Srgb::new(0xFF, 0xB6, 0xC1),
            Srgb::new(0x20, 0xB2, 0xAA),
            Srgb::new(0x7B, 0x68, 0xEE),
        ],
    },
];

/// A fan quote in the carousel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Testimonial {
    pub name: &'static str,
    pub title: &'static str,
    pub quote: &'static str,
    pub color: Srgb<u8>,
}

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Lila Sprinkle",
        title: "Chief Sweet Officer, Sugar Syndicate",
        quote: "Candy Heaven's treats are so dazzling our office snack table turned into a \
                full-time celebration. The lollipop lounge is now our official meeting room!",
        color: Srgb::new(0xFF, 0x14, 0x93),
    },
    Testimonial {
        name: "Nova Crunch",
        title: "Galaxy Entertainer",
        quote: "The Glow Glaze Gems light up my backstage rider. Fans chase me down just to \
                trade autographs for their next handful!",
        color: Srgb::new(0x00, 0xD9, 0xFF),
    },
    Testimonial {
        name: "Benny Bounce",
        title: "Professional Party Curator",
        quote: "I've traded confetti cannons for Candy Heaven jars. The spill animation alone \
                gets guests squealing before we even serve dessert!",
        color: Srgb::new(0xFF, 0xBE, 0x0B),
    },
];

/// A choice in the quest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestOption {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

/// Id of the option that gets the flattering answer
pub const WINNING_OPTION: &str = "candy-heaven";

pub const QUEST_OPTIONS: [QuestOption; 3] = [
    QuestOption {
        id: "option-a",
        label: "Option A",
        description: "That other sugary brand",
    },
    QuestOption {
        id: "option-b",
        label: "Option B",
        description: "Another meh candy crew",
    },
    QuestOption {
        id: WINNING_OPTION,
        label: "Candy Heaven",
        description: "The legendary sweet studio",
    },
];

/// Canned answer shown after a quest choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestResponse {
    pub title: &'static str,
    pub body: &'static str,
    pub menu: [&'static str; 4],
}

pub const DISCERNING_RESPONSE: QuestResponse = QuestResponse {
    title: "Ah, a discerning sweet soul!",
    body: "We knew we liked you. Quick, holler at us before our latest specials swirl away!",
    menu: [
        "Galactic Swizzle Sticks",
        "Unicorn Fudge Clouds",
        "Aurora Pop Rocks",
        "Mystic Marshmallow Meteors",
    ],
};

pub const RESCUE_RESPONSE: QuestResponse = QuestResponse {
    title: "Clearly, your taste buds need rescuing!",
    body: "You haven't tasted our candy cosmos yet. Get in contact so we can fix that. \
           Here's a teaser menu while you wait:",
    menu: [
        "Confetti Cascade Caramels",
        "Rainbow Ripple Taffy",
        "Fizzing Stardust Chews",
        "Prismatic Lollipop Flights",
    ],
};

/// Contact section copy
pub const CONTACT_HEADLINE: &str = "Holler at the Candy Alchemists";
pub const CONTACT_BLURB: &str = "Drop us a line and we'll assemble a rainbow-tinted tasting \
                                 flight faster than you can say \"sherbet supernova\".";
pub const CONTACT_SUBMIT: &str = "Send Sugargram";

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_hero_candy_delays_are_staggered() {
        assert_eq!(hero_candy_delay(0), Duration::from_millis(400));
        assert_eq!(hero_candy_delay(1), Duration::from_millis(540));
        assert_eq!(hero_candy_delay(7), Duration::from_millis(1380));
    }

    #[test]
    fn test_ids_are_unique() {
        let jar_ids: HashSet<_> = JARS.iter().map(|j| j.id).collect();
        assert_eq!(jar_ids.len(), JARS.len());

        let winners = QUEST_OPTIONS
            .iter()
            .filter(|o| o.id == WINNING_OPTION)
            .count();
        assert_eq!(winners, 1);
    }
}
