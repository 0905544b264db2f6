use std::fmt;

pub const REDIRECT_MARKER: &str = ">";

/// A valid output redirection: `tokens[marker]` is `>` and the target is the last token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub target: String,
    pub marker: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectError {
    MissingTarget,
    ExtraTargets(usize),
    DuplicateMarker,
}

impl fmt::Display for RedirectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RedirectError::MissingTarget => write!(f, "no file after '>'"),
            RedirectError::ExtraTargets(n) => write!(f, "{} files after '>', expected one", n),
            RedirectError::DuplicateMarker => write!(f, "more than one '>'"),
        }
    }
}

impl std::error::Error for RedirectError {}

impl Redirect {
    /// Looks for `>` after the command name. `Ok(None)` means no redirection.
    pub fn parse(tokens: &[String]) -> Result<Option<Self>, RedirectError> {
        let mut markers = tokens
            .iter()
            .enumerate()
            .skip(1)
            .filter(|(_, token)| token.as_str() == REDIRECT_MARKER)
            .map(|(index, _)| index);

        let Some(marker) = markers.next() else {
            return Ok(None);
        };
        if markers.next().is_some() {
            return Err(RedirectError::DuplicateMarker);
        }

        match tokens.len() - marker - 1 {
            0 => Err(RedirectError::MissingTarget),
            1 => Ok(Some(Self {
                target: tokens[marker + 1].clone(),
                marker,
            })),
            n => Err(RedirectError::ExtraTargets(n)),
        }
    }

    /// The argument list with the marker and target removed.
    pub fn strip<'a>(&self, tokens: &'a [String]) -> &'a [String] {
        &tokens[..self.marker]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::tokenize;

    #[test]
    fn test_absent() {
        assert_eq!(Redirect::parse(&tokenize("ls -l /tmp")), Ok(None));
    }

    #[test]
    fn test_valid() {
        let line = tokenize("ls -l > out.txt");
        let redirect = Redirect::parse(&line).unwrap().unwrap();
        assert_eq!(redirect.target, "out.txt");
        assert_eq!(redirect.marker, 2);
        assert_eq!(redirect.strip(&line), tokenize("ls -l").as_slice());
    }

    #[test]
    fn test_missing_target() {
        assert_eq!(
            Redirect::parse(&tokenize("ls >")),
            Err(RedirectError::MissingTarget)
        );
    }

    #[test]
    fn test_too_many_targets() {
        assert_eq!(
            Redirect::parse(&tokenize("ls > a b")),
            Err(RedirectError::ExtraTargets(2))
        );
    }

    #[test]
    fn test_second_marker_anywhere() {
        assert_eq!(
            Redirect::parse(&tokenize("ls > a > b")),
            Err(RedirectError::DuplicateMarker)
        );
        assert_eq!(
            Redirect::parse(&tokenize("ls > > a")),
            Err(RedirectError::DuplicateMarker)
        );
    }

    #[test]
    fn test_marker_as_command_name_is_ignored() {
        assert_eq!(Redirect::parse(&tokenize("> out")), Ok(None));
    }
}
