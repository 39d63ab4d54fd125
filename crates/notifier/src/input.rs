use crate::error::NotifierError;

#[derive(Debug, PartialEq, Eq)]
pub struct Problem {
    pub window: usize,
    pub expenditure: Vec<i64>,
}

/// Parses `n d` followed by `n` integers, all whitespace separated.
pub fn parse(raw: &str) -> Result<Problem, NotifierError> {
    let mut tokens = raw.split_whitespace();
    let days: usize = next_number(&mut tokens, "day count")?;
    let window: usize = next_number(&mut tokens, "window size")?;
    if window == 0 {
        return Err(NotifierError::Parse(String::from("window size must be greater than 0")));
    }

    let expenditure = tokens
        .map(|token| {
            token
                .parse::<i64>()
                .map_err(|error| NotifierError::Parse(format!("`{token}` is not an integer: {error}")))
        })
        .collect::<Result<Vec<_>, _>>()?;
    if expenditure.len() != days {
        return Err(NotifierError::Parse(format!(
            "expected {days} expenditures, found {}",
            expenditure.len()
        )));
    }

    Ok(Problem {
        window,
        expenditure,
    })
}

fn next_number<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    what: &str,
) -> Result<usize, NotifierError> {
    let token = tokens
        .next()
        .ok_or_else(|| NotifierError::Parse(format!("missing {what}")))?;
    token
        .parse()
        .map_err(|error| NotifierError::Parse(format!("invalid {what} `{token}`: {error}")))
}

#[cfg(test)]
mod tests {
    use super::{parse, Problem};
    use crate::error::NotifierError;

    #[test]
    fn test_parse_two_lines() {
        let problem = parse("9 5\n2 3 4 2 3 6 8 4 5\n").unwrap();
        assert_eq!(
            problem,
            Problem {
                window: 5,
                expenditure: vec![2, 3, 4, 2, 3, 6, 8, 4, 5],
            }
        );
    }

    #[test]
    fn test_parse_empty_expenditure() {
        let problem = parse("0 3").unwrap();
        assert!(problem.expenditure.is_empty());
    }

    #[test]
    fn test_missing_header() {
        assert!(matches!(parse(""), Err(NotifierError::Parse(_))));
        assert!(matches!(parse("4"), Err(NotifierError::Parse(_))));
    }

    #[test]
    fn test_non_integer_token() {
        assert!(matches!(parse("2 1\n1 x"), Err(NotifierError::Parse(_))));
        assert!(matches!(parse("two 1\n1 2"), Err(NotifierError::Parse(_))));
    }

    #[test]
    fn test_count_mismatch() {
        let error = parse("3 1\n1 2").unwrap_err();
        assert_eq!(error.to_string(), "Malformed input: expected 3 expenditures, found 2");
    }

    #[test]
    fn test_zero_window() {
        assert!(matches!(parse("1 0\n5"), Err(NotifierError::Parse(_))));
    }
}
