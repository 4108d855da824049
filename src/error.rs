use miette::{Diagnostic, SourceSpan};
use std::{
    error::Error,
    fmt::{Display, Formatter, Result},
};

#[derive(Debug, Diagnostic)]
pub enum ColorStringError {
    #[diagnostic(
        code(colorstring::no_match),
        help("expected #hex, rgb()/rgba(), hsl()/hsla(), hwb() or a color keyword")
    )]
    NoMatch {
        #[source_code]
        src: String,
        #[label("not a recognized color")]
        err_span: SourceSpan,
    },

    #[diagnostic(code(colorstring::component_count))]
    ComponentCount {
        #[source_code]
        src: String,
        #[label("expected 3 or 4 components")]
        err_span: SourceSpan,
        count: usize,
    },

    #[diagnostic(
        code(colorstring::unknown_model),
        help("valid models are rgb, hsl, hwb, hex and keyword")
    )]
    UnknownModel {
        #[source_code]
        src: String,
        #[label("unknown color model")]
        err_span: SourceSpan,
    },
}

pub type ColorStringResult<T> = miette::Result<T>;

impl Display for ColorStringError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            ColorStringError::NoMatch { src, .. } => {
                write!(f, "Unrecognized color string: {:?}", src)
            }
            ColorStringError::ComponentCount { count, .. } => {
                write!(f, "Expected 3 or 4 color components, got {}", count)
            }
            ColorStringError::UnknownModel { src, .. } => {
                write!(f, "Unknown color model: {:?}", src)
            }
        }
    }
}

impl Error for ColorStringError {}

impl ColorStringError {
    /// The whole input is labelled, since no grammar gets far enough to
    /// point at a narrower span.
    pub fn no_match(src: impl Into<String>) -> Self {
        let src = src.into();
        let err_span = (0, src.len()).into();
        Self::NoMatch { src, err_span }
    }

    pub fn component_count(values: &[f64]) -> Self {
        let src = format!("{:?}", values);
        let err_span = (0, src.len()).into();
        Self::ComponentCount {
            src,
            err_span,
            count: values.len(),
        }
    }

    pub fn unknown_model(src: impl Into<String>) -> Self {
        let src = src.into();
        let err_span = (0, src.len()).into();
        Self::UnknownModel { src, err_span }
    }
}
