use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateDirective {
    All,
    Packages(Vec<String>),
}

impl UpdateDirective {
    pub fn from_args(args: &[String]) -> Self {
        if args.is_empty() {
            Self::All
        } else {
            Self::Packages(args.to_vec())
        }
    }
}

// Engine wire shape: the literal `true` for update-everything, otherwise the
// package name list verbatim.
impl Serialize for UpdateDirective {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::All => serializer.serialize_bool(true),
            Self::Packages(names) => {
                let mut seq = serializer.serialize_seq(Some(names.len()))?;
                for name in names {
                    seq.serialize_element(name)?;
                }
                seq.end()
            }
        }
    }
}
