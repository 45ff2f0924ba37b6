//! Core types for ReviewPulse

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Where a raw text came from on the source platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextOrigin {
    /// Post title only
    Title,
    /// Post body only
    Body,
    /// Title and body joined by a newline
    Submission,
    /// A comment under a post
    Comment,
}

/// A piece of already-fetched text mentioning the subject
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawText {
    /// The text content
    pub content: String,

    /// Origin on the source platform (if known)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<TextOrigin>,

    /// Free-form source reference, e.g. a permalink
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl RawText {
    /// Create an untagged raw text
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            origin: None,
            source: None,
        }
    }

    /// Create a comment text
    pub fn comment(content: impl Into<String>) -> Self {
        Self::new(content).with_origin(TextOrigin::Comment)
    }

    /// Create a submission text from a title and an optional body
    pub fn submission(title: impl Into<String>, body: Option<&str>) -> Self {
        let mut content = title.into();
        match body {
            Some(body) if !body.is_empty() => {
                content.push('\n');
                content.push_str(body);
                Self::new(content).with_origin(TextOrigin::Submission)
            }
            _ => Self::new(content).with_origin(TextOrigin::Title),
        }
    }

    /// Tag the text with its origin
    pub fn with_origin(mut self, origin: TextOrigin) -> Self {
        self.origin = Some(origin);
        self
    }

    /// Attach a source reference
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl AsRef<str> for RawText {
    fn as_ref(&self) -> &str {
        &self.content
    }
}

impl From<String> for RawText {
    fn from(content: String) -> Self {
        Self::new(content)
    }
}

impl From<&str> for RawText {
    fn from(content: &str) -> Self {
        Self::new(content)
    }
}

/// A bounded (polarity, subjectivity) pair produced by a sentiment scorer.
///
/// Polarity lies in `[-1.0, 1.0]` and subjectivity in `[0.0, 1.0]`; both are
/// always finite. The only way to obtain a value is through a validating
/// constructor, so every `Sentiment` in the pipeline satisfies the bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SentimentRecord")]
pub struct Sentiment {
    polarity: f64,
    subjectivity: f64,
}

#[derive(Deserialize)]
struct SentimentRecord {
    polarity: f64,
    subjectivity: f64,
}

impl TryFrom<SentimentRecord> for Sentiment {
    type Error = Error;

    fn try_from(record: SentimentRecord) -> Result<Self> {
        Self::new(record.polarity, record.subjectivity)
    }
}

impl Sentiment {
    /// Create a sentiment, rejecting values outside their bounds
    pub fn new(polarity: f64, subjectivity: f64) -> Result<Self> {
        check_finite(polarity, subjectivity)?;

        if !(-1.0..=1.0).contains(&polarity) {
            return Err(Error::invalid_sentiment(format!(
                "polarity {polarity} outside [-1, 1]"
            )));
        }
        if !(0.0..=1.0).contains(&subjectivity) {
            return Err(Error::invalid_sentiment(format!(
                "subjectivity {subjectivity} outside [0, 1]"
            )));
        }

        Ok(Self {
            polarity,
            subjectivity,
        })
    }

    /// Create a sentiment, clamping finite values into their bounds.
    ///
    /// NaN and infinities are still rejected.
    pub fn clamped(polarity: f64, subjectivity: f64) -> Result<Self> {
        check_finite(polarity, subjectivity)?;

        Ok(Self {
            polarity: polarity.clamp(-1.0, 1.0),
            subjectivity: subjectivity.clamp(0.0, 1.0),
        })
    }

    /// The neutral score given to empty or unscorable text
    pub fn neutral() -> Self {
        Self {
            polarity: 0.0,
            subjectivity: 0.0,
        }
    }

    /// Signed sentiment strength in `[-1, 1]`
    pub fn polarity(&self) -> f64 {
        self.polarity
    }

    /// Opinion-vs-fact degree in `[0, 1]`
    pub fn subjectivity(&self) -> f64 {
        self.subjectivity
    }
}

impl Default for Sentiment {
    fn default() -> Self {
        Self::neutral()
    }
}

fn check_finite(polarity: f64, subjectivity: f64) -> Result<()> {
    if polarity.is_finite() && subjectivity.is_finite() {
        Ok(())
    } else {
        Err(Error::invalid_sentiment(format!(
            "non-finite score (polarity {polarity}, subjectivity {subjectivity})"
        )))
    }
}

/// A review text together with its sentiment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ScoredReviewRecord")]
pub struct ScoredReview {
    text: String,
    polarity: f64,
    subjectivity: f64,
}

#[derive(Deserialize)]
struct ScoredReviewRecord {
    text: String,
    polarity: f64,
    subjectivity: f64,
}

impl TryFrom<ScoredReviewRecord> for ScoredReview {
    type Error = Error;

    fn try_from(record: ScoredReviewRecord) -> Result<Self> {
        let sentiment = Sentiment::new(record.polarity, record.subjectivity)?;
        Ok(Self::new(record.text, sentiment))
    }
}

impl ScoredReview {
    /// Wrap a text with its sentiment
    pub fn new(text: impl Into<String>, sentiment: Sentiment) -> Self {
        Self {
            text: text.into(),
            polarity: sentiment.polarity(),
            subjectivity: sentiment.subjectivity(),
        }
    }

    /// The review text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Polarity in `[-1, 1]`
    pub fn polarity(&self) -> f64 {
        self.polarity
    }

    /// Subjectivity in `[0, 1]`
    pub fn subjectivity(&self) -> f64 {
        self.subjectivity
    }

    /// The review's score as a [`Sentiment`]
    pub fn sentiment(&self) -> Sentiment {
        Sentiment {
            polarity: self.polarity,
            subjectivity: self.subjectivity,
        }
    }
}

/// A scored review with its derived polarization score
#[derive(Debug, Clone, PartialEq)]
pub struct RankedReview {
    /// The underlying review
    pub review: ScoredReview,

    /// `|polarity| * (0.5 + 0.5 * subjectivity)`, always >= 0
    pub polarization_score: f64,
}

impl RankedReview {
    /// Rank a review by its polarization score
    pub fn new(review: ScoredReview) -> Self {
        let polarization_score =
            review.polarity().abs() * (0.5 + 0.5 * review.subjectivity());
        Self {
            review,
            polarization_score,
        }
    }

    /// Drop the ranking score
    pub fn into_review(self) -> ScoredReview {
        self.review
    }
}

/// The condensed sentiment profile returned by one analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// Most polarizing reviews, ranked
    pub sentiments: Vec<ScoredReview>,

    /// Weighted average polarity in `[-1, 1]`
    pub average_polarity: f64,

    /// Comma-separated common themes, or the "no themes" sentinel
    pub summary: String,
}

impl AnalysisReport {
    /// Serialize the report as compact JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize the report as indented JSON
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
