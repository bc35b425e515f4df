//! Run configuration for the `intsort` binary.

use std::num::ParseIntError;

use thiserror::Error;

pub const DEFAULT_SIZES: [usize; 4] = [1000, 5000, 10000, 50000];
pub const DEFAULT_VALUE_SCALE: usize = 10;
pub const DEFAULT_PREVIEW_LEN: usize = 20;

pub const USAGE: &str = "\
usage: intsort [--sizes N,N,...] [--scale K] [--preview N] [--seed S]

  --sizes    benchmark array lengths (default 1000,5000,10000,50000)
  --scale    random keys are drawn from [0, len * K] (default 10)
  --preview  elements printed per array (default 20)
  --seed     RNG seed for reproducible runs";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown argument `{0}`")]
    UnknownArgument(String),
    #[error("missing value for `{0}`")]
    MissingValue(&'static str),
    #[error("invalid value for `{flag}`: {source}")]
    InvalidNumber {
        flag: &'static str,
        #[source]
        source: ParseIntError,
    },
    #[error("`--sizes` needs at least one length")]
    NoSizes,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    pub sizes: Vec<usize>,
    pub value_scale: usize,
    pub preview_len: usize,
    pub seed: Option<u64>,
    pub help: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            value_scale: DEFAULT_VALUE_SCALE,
            preview_len: DEFAULT_PREVIEW_LEN,
            seed: None,
            help: false,
        }
    }
}

impl RunConfig {
    /// Parses the arguments that follow the program name.
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            let arg = arg.as_ref();
            let flag = match arg {
                "-h" | "--help" => {
                    config.help = true;
                    continue;
                }
                "--sizes" => "--sizes",
                "--scale" => "--scale",
                "--preview" => "--preview",
                "--seed" => "--seed",
                other => return Err(ConfigError::UnknownArgument(other.to_owned())),
            };
            let value = args.next().ok_or(ConfigError::MissingValue(flag))?;
            let value = value.as_ref();
            match flag {
                "--sizes" => config.sizes = parse_sizes(value)?,
                "--scale" => config.value_scale = parse_number(flag, value)?,
                "--preview" => config.preview_len = parse_number(flag, value)?,
                _ => config.seed = Some(parse_number(flag, value)?),
            }
        }
        Ok(config)
    }

    /// Upper bound of random keys for an array of `len` elements.
    pub fn max_value(&self, len: usize) -> i64 {
        i64::try_from(len.saturating_mul(self.value_scale)).unwrap_or(i64::MAX)
    }
}

fn parse_number<T>(flag: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr<Err = ParseIntError>,
{
    value
        .trim()
        .parse()
        .map_err(|source| ConfigError::InvalidNumber { flag, source })
}

fn parse_sizes(value: &str) -> Result<Vec<usize>, ConfigError> {
    let sizes = value
        .split(',')
        .filter(|s| !s.trim().is_empty())
        .map(|s| parse_number("--sizes", s))
        .collect::<Result<Vec<_>, _>>()?;
    if sizes.is_empty() {
        return Err(ConfigError::NoSizes);
    }
    Ok(sizes)
}
