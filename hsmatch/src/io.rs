use std::{
    fmt,
    fs::File,
    io::{BufReader, BufWriter, Read, Write, stdin, stdout},
    path::{Path, PathBuf},
    str::FromStr,
};

// Every table we read or write may instead come from stdin or go to stdout.
// This enum standardizes the handling of "-".
#[derive(Clone, Debug, PartialEq)]
pub enum PathOrStd {
    Path(PathBuf),
    Std,
}

impl PathOrStd {
    pub fn read(&self) -> anyhow::Result<Box<dyn Read>> {
        match self {
            PathOrStd::Path(path) => Ok(Box::new(BufReader::new(File::open(path)?))),
            PathOrStd::Std => Ok(Box::new(stdin().lock())),
        }
    }

    pub fn write(&self) -> anyhow::Result<Box<dyn Write>> {
        match self {
            PathOrStd::Path(path) => Ok(Box::new(BufWriter::new(File::create(path)?))),
            PathOrStd::Std => Ok(Box::new(stdout().lock())),
        }
    }

    /// Whether this is a file path that does not exist yet
    pub fn is_missing(&self) -> bool {
        match self {
            PathOrStd::Path(path) => !path.exists(),
            PathOrStd::Std => false,
        }
    }
}

impl FromStr for PathOrStd {
    type Err = <PathBuf as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(Self::Std)
        } else {
            Ok(Self::Path(s.parse()?))
        }
    }
}

impl From<&Path> for PathOrStd {
    fn from(path: &Path) -> Self {
        if path == Path::new("-") {
            Self::Std
        } else {
            Self::Path(path.to_owned())
        }
    }
}

impl fmt::Display for PathOrStd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathOrStd::Path(path) => write!(f, "{}", path.display()),
            PathOrStd::Std => write!(f, "-"),
        }
    }
}
