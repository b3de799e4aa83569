//! Static style-period catalog and revival-popularity series.
//!
//! Popularity is a 0-100 index of how prominent a decade's look was in a
//! given year, including the original peak and later revivals. The detail
//! fields (long description, timeline, key pieces) are skipped when a period
//! is serialized on its own; the detail endpoint exposes them explicitly.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RevivalPoint {
    pub year: u16,
    pub popularity: u8,
}

/// A moment within the decade, e.g. "Mid 1970s".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimelineEvent {
    pub year: &'static str,
    pub event: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KeyPiece {
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StylePeriod {
    pub decade: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub key_styles: &'static [&'static str],
    #[serde(skip)]
    pub full_description: &'static str,
    #[serde(skip)]
    pub timeline: &'static [TimelineEvent],
    #[serde(skip)]
    pub key_pieces: &'static [KeyPiece],
    #[serde(skip)]
    pub revival: &'static [RevivalPoint],
}

const fn point(year: u16, popularity: u8) -> RevivalPoint {
    RevivalPoint { year, popularity }
}

const fn moment(year: &'static str, event: &'static str) -> TimelineEvent {
    TimelineEvent { year, event }
}

const fn piece(name: &'static str, description: &'static str) -> KeyPiece {
    KeyPiece { name, description }
}

static PERIODS: &[StylePeriod] = &[
    StylePeriod {
        decade: "1970s",
        title: "Disco & Bohemian",
        description: "Bold patterns, bell-bottoms, platform shoes, and free-spirited bohemian vibes defined this era of self-expression.",
        key_styles: &["Bell-bottoms", "Platform shoes", "Disco fashion", "Bohemian style"],
        full_description: "The 1970s witnessed a fashion revolution that celebrated individuality and freedom. From the glittering dance floors of disco clubs to the laid-back bohemian movement, this decade embraced both glamour and natural aesthetics. Fashion became a form of self-expression, breaking away from the structured styles of previous decades.",
        timeline: &[
            moment("Early 1970s", "Bohemian and hippie styles continue from the 60s, featuring flowing fabrics and natural materials"),
            moment("Mid 1970s", "Disco fashion emerges with platform shoes, bell-bottoms, and metallic fabrics"),
            moment("Late 1970s", "Punk fashion begins to influence mainstream style with DIY aesthetics"),
        ],
        key_pieces: &[
            piece("Bell-Bottom Pants", "Wide-legged pants that flared from the knee down, perfect for dancing"),
            piece("Platform Shoes", "Chunky elevated shoes that added height and drama to any outfit"),
            piece("Peasant Blouses", "Loose-fitting tops with embroidery and flowing sleeves"),
            piece("Maxi Dresses", "Floor-length dresses in bold patterns and earthy tones"),
        ],
        revival: &[
            point(1900, 5),
            point(1920, 8),
            point(1940, 10),
            point(1960, 25),
            point(1975, 95),
            point(1990, 40),
            point(2000, 30),
            point(2010, 55),
            point(2020, 70),
            point(2025, 72),
        ],
    },
    StylePeriod {
        decade: "1980s",
        title: "Power & Pop",
        description: "Bold colors, power suits, athletic wear, and MTV-inspired fashion created an era of excess and confidence.",
        key_styles: &["Power suits", "Neon colors", "Athletic wear", "Big hair accessories"],
        full_description: "The 1980s was an era of bold statements and unapologetic excess. Power dressing dominated corporate culture while MTV revolutionized fashion through music videos. Athletic wear became everyday fashion, and bright neon colors symbolized the optimism and energy of the decade. Fashion was about making an impact.",
        timeline: &[
            moment("Early 1980s", "Power dressing emerges with structured shoulder pads and bold silhouettes"),
            moment("Mid 1980s", "MTV launches, making music video fashion highly influential"),
            moment("Late 1980s", "Athletic wear and neon colors dominate street fashion"),
        ],
        key_pieces: &[
            piece("Power Suits", "Structured blazers with dramatic shoulder pads for professional women"),
            piece("Neon Everything", "Bright, fluorescent colors in clothing and accessories"),
            piece("Leg Warmers", "Dance-inspired accessories that became everyday fashion"),
            piece("Members Only Jackets", "Iconic zip-up jackets with distinctive collar and pockets"),
        ],
        revival: &[
            point(1900, 5),
            point(1940, 6),
            point(1960, 12),
            point(1985, 98),
            point(1995, 35),
            point(2005, 45),
            point(2015, 70),
            point(2023, 80),
            point(2025, 82),
        ],
    },
    StylePeriod {
        decade: "1990s",
        title: "Grunge & Minimalism",
        description: "Flannel shirts, baggy jeans, slip dresses, and minimalist aesthetics reflected a more relaxed, anti-fashion attitude.",
        key_styles: &["Grunge fashion", "Slip dresses", "Baggy jeans", "Minimalist style"],
        full_description: "The 1990s rejected the excess of the 80s in favor of understated cool and authentic self-expression. Grunge brought flannel shirts and combat boots from Seattle to the mainstream, while minimalism offered a clean, sophisticated alternative. This decade valued comfort, individuality, and a more relaxed approach to fashion.",
        timeline: &[
            moment("Early 1990s", "Grunge style emerges from Seattle music scene with flannel and doc martens"),
            moment("Mid 1990s", "Minimalism takes hold with slip dresses and simple silhouettes"),
            moment("Late 1990s", "Hip-hop fashion and sportswear influence mainstream style"),
        ],
        key_pieces: &[
            piece("Flannel Shirts", "Oversized plaid button-ups, often worn tied around the waist"),
            piece("Combat Boots", "Chunky boots like Doc Martens that added edge to any outfit"),
            piece("Slip Dresses", "Simple, silky dresses often layered over t-shirts"),
            piece("Baggy Jeans", "Loose-fitting denim in light washes and relaxed cuts"),
        ],
        revival: &[
            point(1900, 5),
            point(1950, 6),
            point(1970, 12),
            point(1995, 95),
            point(2005, 50),
            point(2015, 75),
            point(2023, 90),
            point(2025, 92),
        ],
    },
    StylePeriod {
        decade: "2000s",
        title: "Y2K & Hip-Hop",
        description: "Low-rise jeans, velour tracksuits, bling culture, and futuristic aesthetics marked the turn of the millennium.",
        key_styles: &["Low-rise jeans", "Velour tracksuits", "Bling accessories", "Pop punk style"],
        full_description: "The 2000s embraced futuristic optimism mixed with hip-hop glamour and pop culture influences. Low-rise jeans, velour tracksuits, and bling accessories defined the era. Technology and celebrity culture heavily influenced fashion, creating a unique aesthetic that celebrated both casual comfort and red-carpet glamour.",
        timeline: &[
            moment("Early 2000s", "Y2K aesthetic brings metallic fabrics and futuristic styles"),
            moment("Mid 2000s", "Celebrity fashion dominates with Paris Hilton and hip-hop influences"),
            moment("Late 2000s", "Skinny jeans and indie fashion begin to emerge"),
        ],
        key_pieces: &[
            piece("Low-Rise Jeans", "Ultra-low waisted denim that defined 2000s silhouettes"),
            piece("Velour Tracksuits", "Matching zip-up sets in velour, often branded"),
            piece("Bling Accessories", "Oversized jewelry, rhinestones, and logo-heavy pieces"),
            piece("Babydoll Tops", "Empire waist tops with ruffles and embellishments"),
        ],
        revival: &[
            point(1900, 5),
            point(1960, 6),
            point(1980, 12),
            point(2005, 95),
            point(2012, 60),
            point(2018, 70),
            point(2024, 92),
            point(2025, 94),
        ],
    },
];

/// All style periods, oldest first.
#[must_use]
pub fn list_periods() -> &'static [StylePeriod] {
    PERIODS
}

/// Look up a period by its exact decade label.
#[must_use]
pub fn find_period(decade: &str) -> Option<&'static StylePeriod> {
    PERIODS.iter().find(|p| p.decade == decade)
}

impl StylePeriod {
    /// The point where this decade's look was most popular.
    #[must_use]
    pub fn peak(&self) -> Option<RevivalPoint> {
        self.revival.iter().copied().max_by_key(|p| p.popularity)
    }
}
