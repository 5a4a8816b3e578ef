use workbench_core::{CommandArg, CommandSet, ValueType};

use crate::signature::{HelpWidget, signature_help};

fn limit() -> CommandArg {
    CommandArg::block(
        "limit",
        vec![
            CommandArg::value("offset", ValueType::Integer),
            CommandArg::value("num", ValueType::Integer),
        ],
    )
    .with_token("LIMIT")
    .optional()
}

#[test]
fn closed_widget_has_no_signature() {
    let mut widget = HelpWidget::default();
    assert_eq!(signature_help(&widget), None);

    widget.update(true, None, None);
    assert_eq!(signature_help(&widget), None);
}

#[test]
fn command_signature_skips_own_token() {
    let set = CommandSet::bundled().unwrap();
    let tree = set.tree("FT.EXPLAIN").unwrap();
    let mut widget = HelpWidget::default();
    widget.update(true, Some(tree), Some(&tree.arguments[2]));

    let help = signature_help(&widget).unwrap();

    assert_eq!(help.label, "FT.EXPLAIN index query [DIALECT dialect]");
    assert_eq!(help.parameters, ["index", "query", "[DIALECT dialect]"]);
    assert_eq!(help.active_parameter, Some(1));
}

#[test]
fn block_signature_leads_with_keyword() {
    let block = limit();
    let mut widget = HelpWidget::default();
    widget.update(true, Some(&block), Some(&block.arguments[1]));

    let help = signature_help(&widget).unwrap();

    assert_eq!(help.label, "LIMIT offset num");
    assert_eq!(help.active_parameter, Some(1));
}

#[test]
fn leaf_parent_renders_itself() {
    let mut widget = HelpWidget::default();
    widget.update(true, Some(&CommandArg::pure_token("NOCONTENT")), None);

    let help = signature_help(&widget).unwrap();

    assert_eq!(help.label, "NOCONTENT");
    assert!(help.parameters.is_empty());
    assert_eq!(help.active_parameter, None);
}

#[test]
fn update_keeps_previous_nodes() {
    let block = limit();
    let mut widget = HelpWidget::default();
    widget.update(true, Some(&block), Some(&block.arguments[0]));

    widget.update(false, None, None);
    assert!(!widget.is_open);
    assert_eq!(widget.parent.as_ref(), Some(&block));

    widget.update(true, None, Some(&block.arguments[1]));
    assert_eq!(signature_help(&widget).unwrap().active_parameter, Some(1));
}
