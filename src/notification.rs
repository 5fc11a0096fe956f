use serde_json::{json, Value};

/// The six standard Zabbix severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    NotClassified,
    Information,
    Warning,
    Average,
    High,
    Disaster,
}

impl Severity {
    /// Parse a severity label as Zabbix emits it. Matching is exact and
    /// case-sensitive; anything unrecognized falls back to `NotClassified`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Information" => Severity::Information,
            "Warning" => Severity::Warning,
            "Average" => Severity::Average,
            "High" => Severity::High,
            "Disaster" => Severity::Disaster,
            _ => Severity::NotClassified,
        }
    }

    fn color(self) -> CardColor {
        match self {
            Severity::NotClassified => CardColor::Grey,
            Severity::Information => CardColor::Blue,
            Severity::Warning => CardColor::Yellow,
            Severity::Average => CardColor::Orange,
            Severity::High => CardColor::Red,
            Severity::Disaster => CardColor::Purple,
        }
    }
}

/// The closed palette of card header templates this tool emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardColor {
    Grey,
    Blue,
    Yellow,
    Orange,
    Red,
    Purple,
    Green,
}

impl CardColor {
    pub fn as_str(self) -> &'static str {
        match self {
            CardColor::Grey => "grey",
            CardColor::Blue => "blue",
            CardColor::Yellow => "yellow",
            CardColor::Orange => "orange",
            CardColor::Red => "red",
            CardColor::Purple => "purple",
            CardColor::Green => "green",
        }
    }
}

/// A single outbound alert, built fresh per invocation.
pub struct Notification {
    subject: String,
    message: String,
    severity: Severity,
}

impl Notification {
    pub fn new(subject: String, message: String, severity: Severity) -> Self {
        Self {
            subject,
            message,
            severity,
        }
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Whether this alert announces that a problem has cleared.
    ///
    /// Matching is substring containment, not whole-word. Note the
    /// asymmetry inherited from the Zabbix action scripts this replaces:
    /// "RESOLVED"/"OK" are only matched (case-insensitively) against the
    /// subject, while "恢复" is matched against both subject and message.
    pub fn is_recovery(&self) -> bool {
        self.subject.contains("恢复")
            || self.message.contains("恢复")
            || self.subject.to_uppercase().contains("RESOLVED")
            || self.subject.to_uppercase().contains("OK")
    }

    /// Recovery notifications are always green; everything else takes the
    /// color of its severity.
    pub fn card_color(&self) -> CardColor {
        if self.is_recovery() {
            CardColor::Green
        } else {
            self.severity.color()
        }
    }

    /// Build the Feishu interactive-card payload for this alert.
    pub fn to_card(&self) -> Value {
        json!({
            "msg_type": "interactive",
            "card": {
                "schema": "2.0",
                "config": {
                    "style": {
                        "text_size": {
                            "normal_v2": {
                                "default": "normal",
                                "pc": "normal",
                                "mobile": "heading"
                            }
                        }
                    }
                },
                "body": {
                    "direction": "vertical",
                    "padding": "12px 12px 12px 12px",
                    "elements": [
                        {
                            "tag": "markdown",
                            "content": self.message,
                            "text_align": "left",
                            "text_size": "normal_v2",
                            "margin": "0px 0px 0px 0px"
                        }
                    ]
                },
                "header": {
                    "title": {
                        "tag": "plain_text",
                        "content": self.subject
                    },
                    "subtitle": {
                        "tag": "plain_text",
                        "content": "告警通知"
                    },
                    "template": self.card_color().as_str(),
                    "padding": "12px 12px 12px 12px"
                }
            }
        })
    }
}

#[cfg(test)]
#[path = "notification_tests.rs"]
mod tests;
