use super::Expression;

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SentenceLetter(symbol) => write!(f, "{symbol}"),

            Self::Predicate { name, args } => {
                write!(f, "{name}")?;
                for arg in args {
                    write!(f, "{arg}")?;
                }
                Ok(())
            }

            Self::Junction {
                conjunction,
                juncts,
            } => {
                let connective = match conjunction {
                    true => " ∧ ",
                    false => " ∨ ",
                };
                write!(f, "(")?;
                for (index, junct) in juncts.iter().enumerate() {
                    if index > 0 {
                        write!(f, "{connective}")?;
                    }
                    write!(f, "{junct}")?;
                }
                write!(f, ")")
            }

            Self::Conditional {
                antecedent,
                consequent,
            } => write!(f, "({antecedent} → {consequent})"),

            Self::Biconditional { lhs, rhs } => write!(f, "({lhs} ≡ {rhs})"),

            Self::Negation(inner) => write!(f, "¬{inner}"),

            Self::Quantifier {
                universal,
                symbol,
                body,
            } => {
                let quantifier = match universal {
                    true => '∀',
                    false => '∃',
                };
                // Predicate bodies are always wrapped, e.g. `(∀x)(Fx)`.
                match body.as_ref() {
                    Self::Predicate { .. } => write!(f, "({quantifier}{symbol})({body})"),
                    _ => write!(f, "({quantifier}{symbol}){body}"),
                }
            }

            Self::Identity { lhs, rhs, equal } => match equal {
                true => write!(f, "{lhs}={rhs}"),
                false => write!(f, "{lhs}≠{rhs}"),
            },
        }
    }
}
