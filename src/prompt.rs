//! Interactive collection of the four required inputs.

use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};

/// Everything the pipeline needs from the user.
#[derive(Clone, PartialEq, Eq)]
pub struct Inputs {
    pub year: String,
    pub username: String,
    pub token: String,
    pub text: String,
}

impl std::fmt::Debug for Inputs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Inputs")
            .field("year", &self.year)
            .field("username", &self.username)
            .field("token", &"***")
            .field("text", &self.text)
            .finish()
    }
}

/// Values already supplied on the command line.
#[derive(Debug, Default, Clone)]
pub struct Provided {
    pub year: Option<String>,
    pub username: Option<String>,
    pub token: Option<String>,
    pub text: Option<String>,
}

/// Which inputs a run needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Year, username, access token and text.
    Publish,
    /// Year and text. Credentials are taken from `provided` if present and
    /// never prompted for.
    Preview,
}

/// Prompts for every value not in `provided` that `mode` needs, then checks
/// that none is blank. All values are trimmed.
pub fn gather<R: BufRead, W: Write>(
    provided: Provided,
    mode: Mode,
    input: &mut R,
    output: &mut W,
) -> Result<Inputs> {
    let year = value_or_ask(provided.year, "Year: ", input, output)?;
    let (username, token) = match mode {
        Mode::Publish => (
            value_or_ask(provided.username, "GitHub Username: ", input, output)?,
            value_or_ask(provided.token, "GitHub Access Token: ", input, output)?,
        ),
        Mode::Preview => (trimmed(provided.username), trimmed(provided.token)),
    };
    let text = value_or_ask(provided.text, "Text to display on grid: ", input, output)?;

    let missing_credentials = mode == Mode::Publish && (username.is_empty() || token.is_empty());
    if year.is_empty() || text.is_empty() || missing_credentials {
        bail!("All fields are required.");
    }
    Ok(Inputs {
        year,
        username,
        token,
        text,
    })
}

fn value_or_ask<R: BufRead, W: Write>(
    value: Option<String>,
    label: &str,
    input: &mut R,
    output: &mut W,
) -> Result<String> {
    match value {
        Some(v) => Ok(v.trim().to_string()),
        None => ask(label, input, output),
    }
}

fn trimmed(value: Option<String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}

/// Writes `label`, reads one line and returns it trimmed. End of input
/// yields an empty string.
fn ask<R: BufRead, W: Write>(label: &str, input: &mut R, output: &mut W) -> Result<String> {
    write!(output, "{label}").context("failed to write prompt")?;
    output.flush().context("failed to write prompt")?;
    let mut line = String::new();
    input.read_line(&mut line).context("failed to read input")?;
    Ok(line.trim().to_string())
}
