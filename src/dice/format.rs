//! Result formatting

use std::fmt;

use super::Evaluation;

/// Render a modifier with its sign: `""` for zero, `"+5"`, `"-3"`
pub fn signed_modifier(modifier: i64) -> String {
    if modifier > 0 {
        format!("+{}", modifier)
    } else if modifier < 0 {
        modifier.to_string()
    } else {
        String::new()
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Evaluation::Single { expression, total } => {
                write!(f, "[{}] {}", expression, total)
            }
            Evaluation::Set { set, totals } => {
                write!(f, "[{}] ", set.expression)?;
                for (i, total) in totals.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", total)?;
                }
                Ok(())
            }
        }
    }
}
