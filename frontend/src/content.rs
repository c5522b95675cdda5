pub const GAME_TITLE: &str = "DEFEND THE REALM";

pub const MAX_RATING: u8 = 5;

/// In-page sections reachable from the nav bar, as (label, element id).
pub const SECTIONS: [(&str, &str); 3] = [
    ("Features", "features"),
    ("Gameplay", "gameplay"),
    ("Testimonials", "testimonials"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
    Purple,
    PurpleLight,
    Blue,
}

impl Accent {
    pub fn class(&self) -> &'static str {
        match self {
            Accent::Purple => "accent-purple",
            Accent::PurpleLight => "accent-purple-light",
            Accent::Blue => "accent-blue",
        }
    }
}

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub accent: Accent,
}

pub const FEATURES: [Feature; 6] = [
    Feature {
        icon: "🛡️",
        title: "Strategic Defense Planning",
        description: "Deploy towers, traps, and barriers with intuitive VR controls. Every decision shapes your defensive strategy.",
        accent: Accent::Purple,
    },
    Feature {
        icon: "🎯",
        title: "Enemy Wave Intelligence",
        description: "Face increasingly challenging enemies with adaptive AI that responds to your tactics and strategy.",
        accent: Accent::Blue,
    },
    Feature {
        icon: "🎮",
        title: "Intuitive Controls",
        description: "Natural gesture controls for building, upgrading, and tactically responding to threats in real-time.",
        accent: Accent::PurpleLight,
    },
    Feature {
        icon: "⚡",
        title: "Tower Upgrades & Abilities",
        description: "Research and unlock powerful tower upgrades and special abilities to enhance your defensive capabilities.",
        accent: Accent::Blue,
    },
    Feature {
        icon: "🥽",
        title: "Full 360° Immersion",
        description: "Experience battles from any angle with complete freedom to move and interact with your defenses.",
        accent: Accent::Purple,
    },
    Feature {
        icon: "⌖",
        title: "Precision Targeting",
        description: "Take direct control of special weapons for precision targeting during critical moments in battle.",
        accent: Accent::PurpleLight,
    },
];

pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub rating: u8,
}

impl Testimonial {
    /// Number of filled stars, never more than the row holds.
    pub fn filled_stars(&self) -> usize {
        usize::from(self.rating.min(MAX_RATING))
    }

    /// One flag per star in the row, filled ones first.
    pub fn stars(&self) -> impl Iterator<Item = bool> {
        let filled = self.filled_stars();
        (0..usize::from(MAX_RATING)).map(move |i| i < filled)
    }
}

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "The most immersive tower defense game I've ever played. The ability to physically walk around your defenses and interact with towers takes strategy to a whole new level.",
        author: "VR Gaming Monthly",
        rating: 5,
    },
    Testimonial {
        quote: "Defend The Realm perfectly translates the tower defense genre into VR. The tactile controls feel natural, and the strategic depth is impressive.",
        author: "Quest Gamer",
        rating: 5,
    },
    Testimonial {
        quote: "The attention to detail is astounding. From the particle effects to the enemy design, everything comes together to create a truly memorable VR experience.",
        author: "VR Enthusiast",
        rating: 4,
    },
];

pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
}

pub const STATS: [Stat; 3] = [
    Stat { number: "12+", label: "Unique Tower Types" },
    Stat { number: "30+", label: "Challenging Levels" },
    Stat { number: "50+", label: "Hours of Gameplay" },
];

pub struct DetailCard {
    pub title: &'static str,
    pub body: &'static str,
}

pub const DETAIL_CARDS: [DetailCard; 2] = [
    DetailCard {
        title: "Tactical Map View",
        body: "Command your defenses from a strategic overview or zoom in for direct control",
    },
    DetailCard {
        title: "Real-time Combat",
        body: "Feel the intensity of battle with haptic feedback as enemies attack your defenses",
    },
];

pub struct HeroBadge {
    pub icon: &'static str,
    pub text: &'static str,
}

pub const HERO_BADGES: [HeroBadge; 3] = [
    HeroBadge { icon: "🛡️", text: "Strategic Gameplay" },
    HeroBadge { icon: "🎮", text: "Full VR Immersion" },
    HeroBadge { icon: "🥽", text: "Meta Quest Optimized" },
];

pub struct SocialLink {
    pub icon: &'static str,
    pub label: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink { icon: "f", label: "Facebook" },
    SocialLink { icon: "𝕏", label: "Twitter" },
    SocialLink { icon: "◎", label: "Instagram" },
    SocialLink { icon: "▶", label: "YouTube" },
];

pub struct FooterColumn {
    pub title: &'static str,
    pub links: &'static [&'static str],
}

pub const FOOTER_COLUMNS: [FooterColumn; 4] = [
    FooterColumn {
        title: "Game",
        links: &["Features", "Gameplay", "Updates", "Roadmap"],
    },
    FooterColumn {
        title: "Support",
        links: &["FAQ", "Contact", "Tutorials", "Requirements"],
    },
    FooterColumn {
        title: "Company",
        links: &["About Us", "Careers", "Press Kit", "Blog"],
    },
    FooterColumn {
        title: "Legal",
        links: &["Terms", "Privacy", "Cookies", "Licenses"],
    },
];

/// Footer links that point at a section on this page get its fragment.
pub fn footer_href(label: &str) -> String {
    SECTIONS
        .iter()
        .find(|(section, _)| *section == label)
        .map(|(_, id)| format!("#{}", id))
        .unwrap_or_else(|| "#".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratings_render_within_row() {
        let over = Testimonial { quote: "", author: "", rating: 9 };
        assert_eq!(over.filled_stars(), 5);
        assert_eq!(over.stars().count(), 5);

        let none = Testimonial { quote: "", author: "", rating: 0 };
        assert!(none.stars().all(|filled| !filled));
    }

    #[test]
    fn stars_fill_from_the_left() {
        let stars: Vec<bool> = TESTIMONIALS[2].stars().collect();
        assert_eq!(stars, vec![true, true, true, true, false]);
    }

    #[test]
    fn nav_sections_have_distinct_ids() {
        let ids: Vec<&str> = SECTIONS.iter().map(|(_, id)| *id).collect();
        assert_eq!(ids, vec!["features", "gameplay", "testimonials"]);
    }

    #[test]
    fn footer_links_to_sections_use_fragments() {
        assert_eq!(footer_href("Gameplay"), "#gameplay");
        assert_eq!(footer_href("Careers"), "#");
    }
}
