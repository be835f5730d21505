//! Dashboard state and its reducer.
//!
//! All dashboard state lives in one [`Dashboard`] value and changes only
//! through [`Dashboard::apply`]. The reducer does no I/O: it returns
//! [`Effect`]s that the owner executes (dispatch a prediction, fetch a
//! summary, ask a question, show a notice) and feeds back as new events.
//!
//! Every prediction run is stamped with a generation [`Ticket`]. Replies for
//! a ticket older than the latest run are dropped, so a slow response can
//! never overwrite newer state. Chat replies are stamped the same way with
//! the conversation epoch, which a batch run bumps when it clears the
//! transcript.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::ids;
use crate::insights::InsightError;
use crate::models::chat::{ChatMessage, ChatRole};
use crate::models::correlation::CorrelationMatrix;
use crate::models::feature::FeatureImportance;
use crate::models::notice::Notice;
use crate::models::pattern::TransactionPattern;
use crate::models::prediction::PredictionResult;
use crate::patterns;

/// Shown when a run produced no results to summarize.
pub const EMPTY_SUMMARY: &str =
    "No transactions were processed. Please run a prediction to see a summary.";
/// Shown when the summary collaborator failed.
pub const SUMMARY_FALLBACK: &str = "Could not generate a summary.";
/// Shown when the collaborator succeeded with an empty summary.
pub const SUMMARY_DEFAULT: &str = "Summary generated successfully.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RunKind {
    Single,
    Batch,
}

/// Handle for one prediction round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub generation: u64,
    pub kind: RunKind,
}

/// Display form of the single-mode risk score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskGauge {
    /// Score as a percentage, two decimals.
    pub percent: f64,
    /// Rounded percentage, `0..=100`.
    pub slider: u8,
}

impl RiskGauge {
    pub fn from_score(score: f64) -> Self {
        let percent = score * 100.0;
        Self {
            percent: (percent * 100.0).round() / 100.0,
            slider: percent.round().clamp(0.0, 100.0) as u8,
        }
    }
}

#[derive(Debug)]
pub enum DashboardEvent {
    RunStarted {
        kind: RunKind,
    },
    RunSucceeded {
        ticket: Ticket,
        results: Vec<PredictionResult>,
        feature_importance: Vec<FeatureImportance>,
        today: Date,
        correlation: CorrelationMatrix,
    },
    RunFailed {
        ticket: Ticket,
        error: String,
    },
    SummaryResolved {
        ticket: Ticket,
        outcome: Result<String, InsightError>,
    },
    QuestionAsked {
        question: String,
    },
    AnswerResolved {
        epoch: u64,
        outcome: Result<String, InsightError>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Perform the prediction call for this ticket.
    Dispatch(Ticket),
    /// Fetch a summary of `results` and report it under `ticket`.
    Summarize {
        ticket: Ticket,
        results: Vec<PredictionResult>,
    },
    /// Ask the collaborator and report back under `epoch`.
    Answer {
        epoch: u64,
        question: String,
        results: Vec<PredictionResult>,
    },
    Notify(Notice),
}

/// The whole dashboard state.
#[derive(Debug, Clone)]
pub struct Dashboard {
    results: Vec<PredictionResult>,
    feature_importance: Vec<FeatureImportance>,
    risk_score: Option<f64>,
    patterns: Vec<TransactionPattern>,
    correlation: CorrelationMatrix,
    summary: String,
    summary_pending: bool,
    messages: Vec<ChatMessage>,
    loading: bool,
    replying: bool,
    generation: u64,
    /// Generation whose results the pending summary describes. Only a
    /// successful run or a batch start moves it, so a failed single run
    /// does not orphan the summary already in flight.
    summary_generation: u64,
    epoch: u64,
}

/// Serializable view of the dashboard handed to the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DashboardSnapshot {
    pub results: Vec<PredictionResult>,
    pub flagged: Vec<PredictionResult>,
    pub feature_importance: Vec<FeatureImportance>,
    pub risk_score: Option<f64>,
    pub risk_gauge: Option<RiskGauge>,
    pub patterns: Vec<TransactionPattern>,
    pub correlation: CorrelationMatrix,
    pub summary: String,
    pub summary_pending: bool,
    pub messages: Vec<ChatMessage>,
    pub loading: bool,
    pub replying: bool,
    pub generation: u64,
}

impl Dashboard {
    pub fn new(correlation: CorrelationMatrix) -> Self {
        Self {
            results: Vec::new(),
            feature_importance: Vec::new(),
            risk_score: None,
            patterns: patterns::seed_patterns(),
            correlation,
            summary: String::new(),
            summary_pending: false,
            messages: Vec::new(),
            loading: false,
            replying: false,
            generation: 0,
            summary_generation: 0,
            epoch: 0,
        }
    }

    pub fn results(&self) -> &[PredictionResult] {
        &self.results
    }

    pub fn feature_importance(&self) -> &[FeatureImportance] {
        &self.feature_importance
    }

    pub fn risk_score(&self) -> Option<f64> {
        self.risk_score
    }

    pub fn patterns(&self) -> &[TransactionPattern] {
        &self.patterns
    }

    pub fn correlation(&self) -> &CorrelationMatrix {
        &self.correlation
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_replying(&self) -> bool {
        self.replying
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Results the model labelled fraudulent.
    pub fn flagged(&self) -> Vec<PredictionResult> {
        self.results
            .iter()
            .filter(|r| r.prediction.is_fraudulent())
            .cloned()
            .collect()
    }

    pub fn risk_gauge(&self) -> Option<RiskGauge> {
        self.risk_score.map(RiskGauge::from_score)
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            results: self.results.clone(),
            flagged: self.flagged(),
            feature_importance: self.feature_importance.clone(),
            risk_score: self.risk_score,
            risk_gauge: self.risk_gauge(),
            patterns: self.patterns.clone(),
            correlation: self.correlation.clone(),
            summary: self.summary.clone(),
            summary_pending: self.summary_pending,
            messages: self.messages.clone(),
            loading: self.loading,
            replying: self.replying,
            generation: self.generation,
        }
    }

    fn is_current(&self, ticket: Ticket) -> bool {
        ticket.generation == self.generation
    }

    pub fn apply(&mut self, event: DashboardEvent) -> Vec<Effect> {
        match event {
            DashboardEvent::RunStarted { kind } => self.run_started(kind),
            DashboardEvent::RunSucceeded {
                ticket,
                results,
                feature_importance,
                today,
                correlation,
            } => self.run_succeeded(ticket, results, feature_importance, today, correlation),
            DashboardEvent::RunFailed { ticket, error } => self.run_failed(ticket, error),
            DashboardEvent::SummaryResolved { ticket, outcome } => {
                self.summary_resolved(ticket, outcome)
            }
            DashboardEvent::QuestionAsked { question } => self.question_asked(question),
            DashboardEvent::AnswerResolved { epoch, outcome } => {
                self.answer_resolved(epoch, outcome)
            }
        }
    }

    fn run_started(&mut self, kind: RunKind) -> Vec<Effect> {
        self.generation += 1;
        self.loading = true;

        if kind == RunKind::Batch {
            self.results.clear();
            self.messages.clear();
            self.summary.clear();
            self.summary_pending = false;
            self.feature_importance.clear();
            self.risk_score = None;
            self.replying = false;
            self.summary_generation = self.generation;
            self.epoch += 1;
        }

        vec![Effect::Dispatch(Ticket {
            generation: self.generation,
            kind,
        })]
    }

    fn run_succeeded(
        &mut self,
        ticket: Ticket,
        results: Vec<PredictionResult>,
        feature_importance: Vec<FeatureImportance>,
        today: Date,
        correlation: CorrelationMatrix,
    ) -> Vec<Effect> {
        if !self.is_current(ticket) {
            debug!(
                stale = ticket.generation,
                current = self.generation,
                "dropping stale prediction reply"
            );
            return Vec::new();
        }

        let processed = results.len();
        match ticket.kind {
            RunKind::Batch => {
                self.results = results;
                self.risk_score = None;
            }
            RunKind::Single => {
                self.risk_score = results.first().map(|r| r.risk_score);
                let mut merged = results;
                merged.append(&mut self.results);
                self.results = merged;
            }
        }

        self.feature_importance = feature_importance;
        self.correlation = correlation;
        self.summary_generation = ticket.generation;
        self.patterns = patterns::aggregate_daily(&self.results, today);
        self.loading = false;

        let mut effects = vec![Effect::Notify(Notice::info(
            "Prediction Successful",
            format!("{processed} transaction(s) processed."),
        ))];

        if self.results.is_empty() {
            self.summary = EMPTY_SUMMARY.to_string();
            self.summary_pending = false;
        } else {
            self.summary_pending = true;
            effects.push(Effect::Summarize {
                ticket,
                results: self.results.clone(),
            });
        }

        effects
    }

    fn run_failed(&mut self, ticket: Ticket, error: String) -> Vec<Effect> {
        if !self.is_current(ticket) {
            debug!(
                stale = ticket.generation,
                current = self.generation,
                "dropping stale prediction failure"
            );
            return Vec::new();
        }

        self.loading = false;

        if ticket.kind == RunKind::Batch {
            self.results.clear();
            self.patterns = patterns::seed_patterns();
            self.feature_importance.clear();
            self.summary.clear();
            self.summary_pending = false;
            self.risk_score = None;
        }

        vec![Effect::Notify(Notice::error("Prediction Failed", error))]
    }

    fn summary_resolved(
        &mut self,
        ticket: Ticket,
        outcome: Result<String, InsightError>,
    ) -> Vec<Effect> {
        if ticket.generation != self.summary_generation {
            debug!(
                stale = ticket.generation,
                current = self.summary_generation,
                "dropping stale summary"
            );
            return Vec::new();
        }

        self.summary_pending = false;

        match outcome {
            Ok(summary) if summary.is_empty() => {
                self.summary = SUMMARY_DEFAULT.to_string();
                Vec::new()
            }
            Ok(summary) => {
                self.summary = summary;
                Vec::new()
            }
            Err(e) => {
                self.summary = SUMMARY_FALLBACK.to_string();
                vec![Effect::Notify(Notice::error("AI Summary Failed", e.to_string()))]
            }
        }
    }

    fn question_asked(&mut self, question: String) -> Vec<Effect> {
        self.messages.push(ChatMessage {
            id: ids::user_message_id(),
            role: ChatRole::User,
            content: question.clone(),
        });
        self.replying = true;

        vec![Effect::Answer {
            epoch: self.epoch,
            question,
            results: self.results.clone(),
        }]
    }

    fn answer_resolved(
        &mut self,
        epoch: u64,
        outcome: Result<String, InsightError>,
    ) -> Vec<Effect> {
        if epoch != self.epoch {
            debug!(stale = epoch, current = self.epoch, "dropping stale answer");
            return Vec::new();
        }

        self.replying = false;

        match outcome {
            Ok(answer) => {
                self.messages.push(ChatMessage {
                    id: ids::assistant_message_id(),
                    role: ChatRole::Assistant,
                    content: answer,
                });
                Vec::new()
            }
            Err(e) => {
                self.messages.push(ChatMessage {
                    id: ids::error_message_id(),
                    role: ChatRole::Assistant,
                    content: e.to_string(),
                });
                vec![Effect::Notify(Notice::error("AI Reply Failed", e.to_string()))]
            }
        }
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new(crate::correlation::sample_matrix(&mut rand::thread_rng()))
    }
}
