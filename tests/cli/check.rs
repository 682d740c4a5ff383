use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::CliTest;

#[test]
fn test_no_arguments_prints_usage_and_succeeds() -> Result<()> {
    let test = CliTest::new()?;

    let out = test.check(&[])?;
    assert_eq!(out.exit_code, 0);
    assert!(out.stdout.contains("Usage"));

    Ok(())
}

#[test]
fn test_clean_file_is_silent() -> Result<()> {
    let test = CliTest::with_file(
        "api.py",
        r#"
def get_order(name):
    return frappe.get_doc("Sales Order", name)
"#,
    )?;

    let out = test.check(&["api.py"])?;
    assert_eq!(out.exit_code, 0);
    assert_eq!(out.stdout, "");

    Ok(())
}

#[test]
fn test_doctype_schema_violations_are_reported() -> Result<()> {
    let test = CliTest::with_file(
        "sales_order.json",
        r#"{
            "doctype": "DocType",
            "name": "sales_order",
            "fields": [
                {"fieldname": "CustomerName", "label": "customer name"}
            ]
        }"#,
    )?;

    let out = test.check(&["sales_order.json"])?;
    assert_eq!(out.exit_code, 1);
    assert!(out.stdout.contains("Convention violations found:"));
    assert!(out.stdout.contains(
        "  sales_order.json: DocType name 'sales_order' should use Title Case with spaces"
    ));
    assert!(
        out.stdout
            .contains("  sales_order.json: Field 'CustomerName' should use snake_case naming")
    );
    assert!(
        out.stdout
            .contains("  sales_order.json: Field label 'customer name' should use Title Case")
    );
    assert!(out.stdout.contains("Conventions to follow:"));
    assert!(out.stdout.contains("3 violations"));

    Ok(())
}

#[test]
fn test_python_violations_carry_line_numbers() -> Result<()> {
    let test = CliTest::with_file(
        "api.py",
        r#"import frappe

doc = frappe.get_doc("sales_order")
frappe.throw("Please select a customer")
"#,
    )?;

    let out = test.check(&["api.py"])?;
    assert_eq!(out.exit_code, 1);
    assert!(out.stdout.contains(
        "  api.py: Line 3: DocType 'sales_order' should use Title Case with spaces"
    ));
    assert!(out.stdout.contains(
        "  api.py: Line 4: Missing translation wrapper in frappe.throw: 'Please select a customer'"
    ));

    Ok(())
}

#[test]
fn test_nonexistent_path_is_skipped_silently() -> Result<()> {
    let test = CliTest::new()?;

    let out = test.check(&["does_not_exist.py"])?;
    assert_eq!(out.exit_code, 0);
    assert_eq!(out.stdout, "");
    assert_eq!(out.stderr, "");

    Ok(())
}

#[test]
fn test_unknown_extension_is_skipped() -> Result<()> {
    let test = CliTest::with_file("notes.txt", r#"frappe.get_doc("sales_order")"#)?;

    let out = test.check(&["notes.txt"])?;
    assert_eq!(out.exit_code, 0);
    assert_eq!(out.stdout, "");

    Ok(())
}

#[test]
fn test_multiple_files_accumulate_in_argument_order() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("b.js", r#"frappe.msgprint("Saved successfully");"#)?;
    test.write_file("a.py", r#"frappe.throw("Please select a customer")"#)?;

    let out = test.check(&["b.js", "a.py"])?;
    assert_eq!(out.exit_code, 1);
    let b_pos = out.stdout.find("b.js: Line 1").unwrap();
    let a_pos = out.stdout.find("a.py: Line 1").unwrap();
    assert!(b_pos < a_pos);
    assert!(out.stdout.contains("2 violations"));

    Ok(())
}

#[test]
fn test_directory_argument_is_walked() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "app/doctype/sales_order.json",
        r#"{"doctype": "DocType", "name": "sales_order"}"#,
    )?;
    test.write_file("app/public/form.js", r#"alert("Something went wrong");"#)?;
    test.write_file("app/README.md", "frappe.get_doc(\"sales_order\")")?;

    let out = test.check(&["app"])?;
    assert_eq!(out.exit_code, 1);
    assert!(out.stdout.contains("sales_order.json"));
    assert!(out.stdout.contains("form.js"));
    assert!(!out.stdout.contains("README.md"));

    Ok(())
}

#[test]
fn test_runs_are_idempotent() -> Result<()> {
    let test = CliTest::with_file("api.py", r#"frappe.throw("Please select a customer")"#)?;

    let first = test.check(&["api.py"])?;
    let second = test.check(&["api.py"])?;
    assert_eq!(first.exit_code, 1);
    assert_eq!(second.exit_code, 1);
    assert_eq!(first.stdout, second.stdout);

    Ok(())
}

#[test]
fn test_rules_flag_restricts_passes() -> Result<()> {
    let test = CliTest::with_file(
        "api.py",
        r#"doc = frappe.get_doc("sales_order")
frappe.throw("Please select a customer")
"#,
    )?;

    let out = test.check(&["--rules", "naming", "api.py"])?;
    assert_eq!(out.exit_code, 1);
    assert!(out.stdout.contains("DocType 'sales_order'"));
    assert!(!out.stdout.contains("Missing translation wrapper"));

    Ok(())
}

#[test]
fn test_config_ignores_excludes_paths() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".fraplintrc.json",
        r#"{ "ignores": ["**/generated/**"] }"#,
    )?;
    test.write_file(
        "generated/api.py",
        r#"frappe.throw("Please select a customer")"#,
    )?;
    test.write_file("api.py", r#"frappe.throw("Please select a customer")"#)?;

    let out = test.check(&["."])?;
    assert_eq!(out.exit_code, 1);
    assert!(!out.stdout.contains("generated"));
    assert!(out.stdout.contains("1 violation\n"));

    Ok(())
}

#[test]
fn test_config_ignore_texts_suppresses_strings() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".fraplintrc.json",
        r#"{ "ignoreTexts": ["Please select a customer"] }"#,
    )?;
    test.write_file("api.py", r#"frappe.throw("Please select a customer")"#)?;

    let out = test.check(&["api.py"])?;
    assert_eq!(out.exit_code, 0);
    assert_eq!(out.stdout, "");

    Ok(())
}

#[test]
fn test_malformed_config_is_an_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".fraplintrc.json", "{ not json")?;
    test.write_file("api.py", "x = 1\n")?;

    let out = test.check(&["api.py"])?;
    assert_eq!(out.exit_code, 2);
    assert!(out.stderr.contains("Error"));

    Ok(())
}

#[test]
fn test_verbose_success_summary() -> Result<()> {
    let test = CliTest::with_file("api.py", "x = 1\n")?;

    let out = test.check(&["--verbose", "api.py"])?;
    assert_eq!(out.exit_code, 0);
    assert!(out.stdout.contains("Checked 1 file - no violations found"));

    Ok(())
}
