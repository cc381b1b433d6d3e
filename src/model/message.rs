use crate::node::sarif_node;
use crate::structural::PropertyBag;

sarif_node! {
    /// A message string or a reference to one in `messageStrings`, plus its arguments.
    pub struct Message => Message {
        pub text: Option<String>,
        pub markdown: Option<String>,
        pub id: Option<String>,
        pub arguments: Option<Vec<String>>,
        pub properties: Option<PropertyBag>,
    }
}

impl Message {
    pub fn text(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            ..Self::default()
        }
    }
}

sarif_node! {
    pub struct MultiformatMessageString => MultiformatMessageString {
        pub text: Option<String>,
        pub markdown: Option<String>,
        pub properties: Option<PropertyBag>,
    }
}
