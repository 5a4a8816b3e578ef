//! Inline parameter hints for the command or block around the cursor.

use serde::Serialize;
use workbench_core::CommandArg;

/// State of the parameter hint widget.
///
/// Holds copies of the grammar nodes so the state outlives the command set
/// borrow of the call that produced it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HelpWidget {
    pub is_open: bool,
    /// Command tree or block whose parameters are shown.
    pub parent: Option<CommandArg>,
    /// Parameter to highlight.
    pub current_arg: Option<CommandArg>,
}

impl HelpWidget {
    /// Open or close the widget. Nodes passed as `None` keep their previous value.
    pub fn update(
        &mut self,
        is_open: bool,
        parent: Option<&CommandArg>,
        current_arg: Option<&CommandArg>,
    ) {
        self.is_open = is_open;
        if let Some(parent) = parent {
            self.parent = Some(parent.clone());
        }
        if let Some(current_arg) = current_arg {
            self.current_arg = Some(current_arg.clone());
        }
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }
}

/// One rendered signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignatureHelp {
    pub label: String,
    pub parameters: Vec<String>,
    /// Index into `parameters` of the argument being typed.
    pub active_parameter: Option<usize>,
}

/// Signature of the widget's parent node, or `None` while the widget is closed.
pub fn signature_help(widget: &HelpWidget) -> Option<SignatureHelp> {
    if !widget.is_open {
        return None;
    }
    let parent = widget.parent.as_ref()?;

    if parent.arguments.is_empty() {
        return Some(SignatureHelp {
            label: parent.syntax(),
            parameters: Vec::new(),
            active_parameter: None,
        });
    }

    // The own token of a command tree is already part of the label.
    let args = match parent.arguments.split_first() {
        Some((first, rest)) if first.is_pure_token() && first.name.is_empty() => rest,
        _ => &parent.arguments[..],
    };

    let parameters: Vec<String> = args.iter().map(CommandArg::syntax).collect();
    let label = parent
        .token
        .iter()
        .chain(&parameters)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ");
    let active_parameter = widget
        .current_arg
        .as_ref()
        .and_then(|current| args.iter().position(|arg| arg.name == current.name));

    Some(SignatureHelp {
        label,
        parameters,
        active_parameter,
    })
}
