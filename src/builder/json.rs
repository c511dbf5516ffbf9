//! The json interchange format for documents.
//!
//! The types of this module mirror the structures of the library, and are converted to and from the structures after (de)serialisation.

use serde::{Deserialize, Serialize};

use crate::{
    structures::{
        document::Document,
        expression::{Expr, Expression},
        line::{Label, Line, LogicLine, Rule},
        symbol::Symbol,
    },
    types::err::{self, ParseError},
};

/// Json representation of a document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentJson {
    pub lines: Vec<LineJson>,
}

/// Json representation of a line.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LineJson {
    Text {
        text: String,
    },
    Logic {
        label: Label,
        #[serde(default)]
        deps: Vec<Label>,
        expression: ExpressionJson,
        rule: RuleJson,
    },
}

/// Json representation of an expression.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ExpressionJson {
    SentenceLetter {
        letter: String,
    },
    Predicate {
        name: String,
        args: Vec<ExpressionJson>,
    },
    Junction {
        conjunction: bool,
        juncts: Vec<ExpressionJson>,
    },
    Conditional {
        antecedent: Box<ExpressionJson>,
        consequent: Box<ExpressionJson>,
    },
    Biconditional {
        lhs: Box<ExpressionJson>,
        rhs: Box<ExpressionJson>,
    },
    Negation {
        inner: Box<ExpressionJson>,
    },
    Quantifier {
        bindings: Vec<BindingJson>,
        body: Box<ExpressionJson>,
    },
    Identity {
        lhs: Box<ExpressionJson>,
        rhs: Box<ExpressionJson>,
        #[serde(default = "default_equal")]
        equal: bool,
    },
}

fn default_equal() -> bool {
    true
}

/// Json representation of a quantifier binding, e.g. `{"quantifier": "forall", "symbol": "x"}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BindingJson {
    pub quantifier: String,
    pub symbol: String,
}

/// Json representation of a rule.
///
/// Which fields are required depends on the name of the rule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleJson {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<Label>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lines: Option<Vec<Label>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discharged: Option<Label>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable: Option<String>,
}

fn symbol(string: &str) -> Result<Symbol, ParseError> {
    let mut chars = string.chars();
    match (chars.next(), chars.next()) {
        (Some(symbol), None) => Ok(symbol),
        _ => Err(ParseError::Symbol(string.to_string())),
    }
}

impl TryFrom<&ExpressionJson> for Expr {
    type Error = ParseError;

    fn try_from(json: &ExpressionJson) -> Result<Self, Self::Error> {
        let expression = match json {
            ExpressionJson::SentenceLetter { letter } => Expression::letter(symbol(letter)?),

            ExpressionJson::Predicate { name, args } => Expression::predicate(
                symbol(name)?,
                args.iter().map(Expr::try_from).collect::<Result<_, _>>()?,
            ),

            ExpressionJson::Junction {
                conjunction,
                juncts,
            } => {
                if juncts.is_empty() {
                    return Err(ParseError::EmptyJunction);
                }
                Expression::junction(
                    *conjunction,
                    juncts.iter().map(Expr::try_from).collect::<Result<_, _>>()?,
                )
            }

            ExpressionJson::Conditional {
                antecedent,
                consequent,
            } => Expression::conditional(
                Expr::try_from(antecedent.as_ref())?,
                Expr::try_from(consequent.as_ref())?,
            ),

            ExpressionJson::Biconditional { lhs, rhs } => Expression::biconditional(
                Expr::try_from(lhs.as_ref())?,
                Expr::try_from(rhs.as_ref())?,
            ),

            ExpressionJson::Negation { inner } => {
                Expression::negation(Expr::try_from(inner.as_ref())?)
            }

            ExpressionJson::Quantifier { bindings, body } => {
                let mut expanded = Vec::with_capacity(bindings.len());
                for binding in bindings {
                    let universal = match binding.quantifier.as_str() {
                        "forall" | "∀" => true,
                        "exists" | "∃" => false,
                        _ => return Err(ParseError::Binding(binding.quantifier.clone())),
                    };
                    expanded.push((universal, symbol(&binding.symbol)?));
                }
                Expression::quantifier(&expanded, Expr::try_from(body.as_ref())?)
            }

            ExpressionJson::Identity { lhs, rhs, equal } => Expression::identity(
                Expr::try_from(lhs.as_ref())?,
                Expr::try_from(rhs.as_ref())?,
                *equal,
            ),
        };

        Ok(expression)
    }
}

impl From<&Expression> for ExpressionJson {
    fn from(expression: &Expression) -> Self {
        let boxed = |expr: &Expr| Box::new(ExpressionJson::from(expr.as_ref()));

        match expression {
            Expression::SentenceLetter(letter) => ExpressionJson::SentenceLetter {
                letter: letter.to_string(),
            },

            Expression::Predicate { name, args } => ExpressionJson::Predicate {
                name: name.to_string(),
                args: args.iter().map(|arg| arg.as_ref().into()).collect(),
            },

            Expression::Junction {
                conjunction,
                juncts,
            } => ExpressionJson::Junction {
                conjunction: *conjunction,
                juncts: juncts.iter().map(|junct| junct.as_ref().into()).collect(),
            },

            Expression::Conditional {
                antecedent,
                consequent,
            } => ExpressionJson::Conditional {
                antecedent: boxed(antecedent),
                consequent: boxed(consequent),
            },

            Expression::Biconditional { lhs, rhs } => ExpressionJson::Biconditional {
                lhs: boxed(lhs),
                rhs: boxed(rhs),
            },

            Expression::Negation(inner) => ExpressionJson::Negation {
                inner: boxed(inner),
            },

            Expression::Quantifier {
                universal,
                symbol,
                body,
            } => ExpressionJson::Quantifier {
                bindings: vec![BindingJson {
                    quantifier: match universal {
                        true => "forall".to_string(),
                        false => "exists".to_string(),
                    },
                    symbol: symbol.to_string(),
                }],
                body: boxed(body),
            },

            Expression::Identity { lhs, rhs, equal } => ExpressionJson::Identity {
                lhs: boxed(lhs),
                rhs: boxed(rhs),
                equal: *equal,
            },
        }
    }
}

impl TryFrom<&RuleJson> for Rule {
    type Error = ParseError;

    fn try_from(json: &RuleJson) -> Result<Self, Self::Error> {
        let missing = |field: &'static str| ParseError::MissingField {
            rule: json.name.clone(),
            field,
        };

        let line = || json.line.ok_or_else(|| missing("line"));
        let discharged = || json.discharged.ok_or_else(|| missing("discharged"));

        let rule = match json.name.as_str() {
            "P" => Rule::Premise,

            "D" => Rule::Discharge {
                cited: line()?,
                discharged: discharged()?,
            },

            "TF" => Rule::TruthFunctional {
                cited: json.lines.clone().ok_or_else(|| missing("lines"))?,
            },

            "CQ" => Rule::ChangeOfQuantifier { cited: line()? },

            "UI" => Rule::UniversalInstantiation { cited: line()? },

            "UG" => Rule::UniversalGeneralization { cited: line()? },

            "EG" => Rule::ExistentialGeneralization { cited: line()? },

            "EII" => Rule::ExistentialInstantiationIntro {
                cited: line()?,
                instantial: symbol(json.variable.as_deref().ok_or_else(|| missing("variable"))?)?,
            },

            "EIE" => Rule::ExistentialInstantiationElim {
                cited: line()?,
                discharged: discharged()?,
            },

            name => Rule::Unrecognized(name.to_string()),
        };

        Ok(rule)
    }
}

impl From<&Rule> for RuleJson {
    fn from(rule: &Rule) -> Self {
        let mut json = RuleJson {
            name: rule.name().to_string(),
            ..Default::default()
        };

        match rule {
            Rule::Premise | Rule::Unrecognized(_) => {}

            Rule::Discharge { cited, discharged }
            | Rule::ExistentialInstantiationElim { cited, discharged } => {
                json.line = Some(*cited);
                json.discharged = Some(*discharged);
            }

            Rule::TruthFunctional { cited } => json.lines = Some(cited.clone()),

            Rule::ChangeOfQuantifier { cited }
            | Rule::UniversalInstantiation { cited }
            | Rule::UniversalGeneralization { cited }
            | Rule::ExistentialGeneralization { cited } => json.line = Some(*cited),

            Rule::ExistentialInstantiationIntro { cited, instantial } => {
                json.line = Some(*cited);
                json.variable = Some(instantial.to_string());
            }
        }

        json
    }
}

impl TryFrom<&LineJson> for Line {
    type Error = ParseError;

    fn try_from(json: &LineJson) -> Result<Self, Self::Error> {
        match json {
            LineJson::Text { text } => Ok(Line::Text(text.clone())),

            LineJson::Logic {
                label,
                deps,
                expression,
                rule,
            } => Ok(Line::Logic(LogicLine::new(
                *label,
                Expr::try_from(expression)?,
                deps.iter().copied(),
                Rule::try_from(rule)?,
            ))),
        }
    }
}

impl From<&Line> for LineJson {
    fn from(line: &Line) -> Self {
        match line {
            Line::Text(text) => LineJson::Text { text: text.clone() },

            Line::Logic(logic) => LineJson::Logic {
                label: logic.label,
                deps: logic.deps.clone(),
                expression: logic.expression.as_ref().into(),
                rule: (&logic.rule).into(),
            },
        }
    }
}

impl Document {
    /// Reads a document from json.
    pub fn read_json(reader: impl std::io::Read) -> Result<Self, err::ErrorKind> {
        let json: DocumentJson = serde_json::from_reader(reader).map_err(ParseError::from)?;
        Ok(Document::try_from(&json)?)
    }

    /// Writes the document as json, in the form read by [read_json](Document::read_json).
    pub fn write_json(&self, writer: impl std::io::Write) -> Result<(), err::ErrorKind> {
        serde_json::to_writer_pretty(writer, &DocumentJson::from(self))
            .map_err(|e| err::ErrorKind::Report(e.to_string()))
    }
}

impl TryFrom<&DocumentJson> for Document {
    type Error = ParseError;

    fn try_from(json: &DocumentJson) -> Result<Self, Self::Error> {
        json.lines.iter().map(Line::try_from).collect()
    }
}

impl From<&Document> for DocumentJson {
    fn from(document: &Document) -> Self {
        DocumentJson {
            lines: document.lines.iter().map(LineJson::from).collect(),
        }
    }
}
