//! Label domains
//!
//! Four closed enumerations. Every label has a canonical English spelling
//! (used for `Display`) and the Korean spelling found in the gold corpus.
//! Parsing accepts either spelling exactly as written.

use std::fmt;
use std::str::FromStr;

/// Common surface of the four label enums.
pub trait Label: Copy + Eq + fmt::Debug + fmt::Display + 'static {
    /// Every value of the domain, in declaration order.
    const ALL: &'static [Self];
    /// Domain name used in error messages.
    const DOMAIN: &'static str;

    fn english(self) -> &'static str;
    fn korean(self) -> &'static str;

    /// Parse either spelling. No trimming, no case folding.
    fn parse_label(token: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|l| l.english() == token || l.korean() == token)
    }

    fn spelled(self, script: Script) -> &'static str {
        match script {
            Script::English => self.english(),
            Script::Korean => self.korean(),
        }
    }
}

/// Which spelling to render labels in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Script {
    #[default]
    English,
    Korean,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLabel {
    pub domain: &'static str,
    pub token: String,
}

impl fmt::Display for UnknownLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a {} label", self.token, self.domain)
    }
}

impl std::error::Error for UnknownLabel {}

macro_rules! label_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $domain:literal {
            $($variant:ident => $en:literal / $ko:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl Label for $name {
            const ALL: &'static [Self] = &[$($name::$variant),+];
            const DOMAIN: &'static str = $domain;

            fn english(self) -> &'static str {
                match self {
                    $($name::$variant => $en),+
                }
            }

            fn korean(self) -> &'static str {
                match self {
                    $($name::$variant => $ko),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.english())
            }
        }

        impl FromStr for $name {
            type Err = UnknownLabel;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$name as Label>::parse_label(s).ok_or_else(|| UnknownLabel {
                    domain: $domain,
                    token: s.to_string(),
                })
            }
        }
    };
}

label_enum!(
    /// Discourse category of a statement.
    DiscourseType, "type" {
        Factual => "Factual" / "사실형",
        Inferential => "Inferential" / "추론형",
        Conversational => "Conversational" / "대화형",
        Predictive => "Predictive" / "예측형",
    }
);

label_enum!(
    Polarity, "polarity" {
        Positive => "Positive" / "긍정",
        Negative => "Negative" / "부정",
        Neutral => "Neutral" / "미정",
    }
);

label_enum!(
    Tense, "tense" {
        Past => "Past" / "과거",
        Present => "Present" / "현재",
        Future => "Future" / "미래",
    }
);

label_enum!(
    /// Epistemic confidence.
    Certainty, "certainty" {
        Certain => "Certain" / "확실",
        Uncertain => "Uncertain" / "불확실",
    }
);

// ============================================================================
// Predictions and gold labels
// ============================================================================

/// The four labels predicted for one statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prediction {
    pub kind: DiscourseType,
    pub polarity: Polarity,
    pub tense: Tense,
    pub certainty: Certainty,
}

impl Prediction {
    /// `Type,Polarity,Tense,Certainty` with no spaces, in the given spelling.
    pub fn render(&self, script: Script) -> String {
        format!(
            "{},{},{},{}",
            self.kind.spelled(script),
            self.polarity.spelled(script),
            self.tense.spelled(script),
            self.certainty.spelled(script)
        )
    }

    /// One prediction-file line: `<n>. Type,Polarity,Tense,Certainty`.
    pub fn to_line(&self, n: usize, script: Script) -> String {
        format!("{}. {}", n, self.render(script))
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Script::English))
    }
}

/// Gold labels for one corpus row.
///
/// A token that is not a known label is kept as `None`: the row still
/// counts toward the total but that attribute can never match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoldLabel {
    pub kind: Option<DiscourseType>,
    pub polarity: Option<Polarity>,
    pub tense: Option<Tense>,
    pub certainty: Option<Certainty>,
}

impl GoldLabel {
    /// Parse an `output` field. Returns `None` unless it splits into exactly four tokens.
    pub fn parse(raw: &str) -> Option<Self> {
        let cleaned = raw.trim().trim_matches('"');
        let parts: Vec<&str> = cleaned.split(',').collect();
        let [kind, polarity, tense, certainty] = parts.as_slice() else {
            return None;
        };
        Some(Self {
            kind: DiscourseType::parse_label(kind),
            polarity: Polarity::parse_label(polarity),
            tense: Tense::parse_label(tense),
            certainty: Certainty::parse_label(certainty),
        })
    }
}
