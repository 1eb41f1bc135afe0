//! One classification pass over a document

use serde::Serialize;

use crate::classify::{ActivityClassifier, DomainClassifier};
use crate::config::ConverterConfig;
use crate::document::Document;
use crate::fingerprint::Fingerprint;
use crate::metadata::MetadataExtractor;
use crate::source::SourceType;
use crate::topics::TopicExtractor;

/// Everything the pipeline derives from a document's text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    pub title: String,
    pub date: String,
    pub source_type: SourceType,
    /// Sorted, never empty
    pub domains: Vec<String>,
    pub activity: String,
    pub topics: Vec<String>,
    pub fingerprint: Fingerprint,
}

/// Bundles the classifiers so they are built once per run
#[derive(Debug, Clone)]
pub struct Analyzer {
    domains: DomainClassifier,
    activities: ActivityClassifier,
    topics: TopicExtractor,
    metadata: MetadataExtractor,
}

impl Analyzer {
    pub fn new(
        domains: DomainClassifier,
        activities: ActivityClassifier,
        topics: TopicExtractor,
        metadata: MetadataExtractor,
    ) -> Self {
        Analyzer {
            domains,
            activities,
            topics,
            metadata,
        }
    }

    pub fn from_config(config: &ConverterConfig) -> Self {
        Self::new(
            DomainClassifier::new(config.domains.clone()),
            ActivityClassifier::new(config.activities.clone()),
            TopicExtractor::new(config.topics.clone()),
            MetadataExtractor::default(),
        )
    }

    pub fn analyze(&self, doc: &Document) -> Analysis {
        let text = doc.content();
        let analysis = Analysis {
            title: self.metadata.extract_title(text),
            date: self.metadata.extract_date(doc),
            source_type: SourceType::detect(text),
            domains: self.domains.classify(text),
            activity: self.activities.classify(text),
            topics: self.topics.extract(text),
            fingerprint: Fingerprint::of_document(text),
        };

        tracing::debug!(
            path = %doc.path().display(),
            title = %analysis.title,
            date = %analysis.date,
            source = %analysis.source_type,
            domains = ?analysis.domains,
            activity = %analysis.activity,
            topics = ?analysis.topics,
            "analyzed"
        );

        analysis
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::from_config(&ConverterConfig::default())
    }
}
