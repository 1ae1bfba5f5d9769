//! Probes against the real system C compiler.
//!
//! Every test returns early when no compiler is installed, so the suite
//! stays green on machines without a C toolchain.

use std::path::PathBuf;
use std::process::Command;

use cprobe_lib::{
    BindingsRequest, EmitConfig, Item, NumericKind, Probe, ProbeConfig, ProbeError, RustPrimitive,
};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn config() -> Option<ProbeConfig> {
    let config = ProbeConfig::from_env();
    let available = Command::new(&config.compiler)
        .args(&config.compiler_args)
        .arg("--version")
        .output()
        .is_ok_and(|output| output.status.success());
    if !available {
        eprintln!("skipping: C compiler `{}` not available", config.compiler);
        return None;
    }
    Some(config)
}

fn system_probe() -> Option<Probe<'static>> {
    config()?;
    Some(Probe::system().unwrap())
}

fn fixture_probe(header: &str) -> Option<Probe<'static>> {
    let mut config = config()?;
    config.include_dirs.push(fixtures_dir());
    config.headers.push(format!("\"{}\"", header));
    Some(config.into_probe().unwrap())
}

#[test]
fn sizeof_char() {
    let Some(probe) = system_probe() else { return };
    assert_eq!(probe.size_of("char").unwrap(), 1);
}

#[test]
fn alignof_char() {
    let Some(probe) = system_probe() else { return };
    match probe.align_of("char") {
        Ok(align) => assert_eq!(align, 1),
        // Pre-C11 compilers lack <stdalign.h>
        Err(ProbeError::Compile(_)) => {}
        Err(error) => panic!("{}", error),
    }
}

#[test]
fn sizeof_compilation_error() {
    let Some(probe) = system_probe() else { return };
    assert!(matches!(probe.size_of("><"), Err(ProbeError::Compile(_))));
}

#[test]
fn sizeof_type_in_header() {
    let Some(mut config) = config() else { return };
    config.headers.push("<inttypes.h>".into());
    let probe = config.into_probe().unwrap();
    assert_eq!(probe.size_of("int32_t").unwrap(), 4);
}

#[test]
fn check_run_pass_fail_and_compile_fail() {
    let Some(probe) = system_probe() else { return };
    let pass = probe.check_run("int main(void) { return 0; }").unwrap();
    assert!(pass.run_output.unwrap().status.success());

    let fail = probe.check_run("int main(void) { return 1; }").unwrap();
    assert!(!fail.run_output.unwrap().status.success());

    let garbage = probe.check_run("I don't think this is a C program.").unwrap();
    assert!(!garbage.compile_output.status.success());
    assert!(garbage.run_output.is_none());
}

#[test]
fn check_compile_pass_and_fail() {
    let Some(probe) = system_probe() else { return };
    assert!(
        probe
            .check_compile("int main(void) { return 0; }")
            .unwrap()
            .status
            .success()
    );
    assert!(
        !probe
            .check_compile("int main(void) { return }")
            .unwrap()
            .status
            .success()
    );
}

#[test]
fn check_macro_definition() {
    let Some(probe) = system_probe() else { return };
    assert!(probe.is_defined_macro("__STDC__").unwrap());
    assert!(!probe.is_defined_macro("THISSHOULDNTBEDEFINED").unwrap());
}

#[test]
fn signedness_of_builtin_types() {
    let Some(probe) = system_probe() else { return };
    assert!(probe.is_signed("signed char").unwrap());
    assert!(!probe.is_signed("unsigned int").unwrap());
    assert!(probe.is_floating_point("float").unwrap());
    assert!(!probe.is_floating_point("long").unwrap());
    assert_eq!(probe.numeric_kind("_Bool").unwrap(), NumericKind::UnsignedInt);
}

/// Every alias in `test_types.h` has the width, signedness and format its
/// name promises.
#[test]
fn fixed_width_aliases() {
    let Some(probe) = fixture_probe("test_types.h") else { return };

    for bits in [8usize, 16, 32, 64] {
        let signed = format!("alias_signed_{}_bit", bits);
        let unsigned = format!("alias_unsigned_{}_bit", bits);

        assert_eq!(probe.size_of(&signed).unwrap(), bits / 8);
        assert_eq!(probe.size_of(&unsigned).unwrap(), bits / 8);
        assert!(probe.is_signed(&signed).unwrap());
        assert!(!probe.is_signed(&unsigned).unwrap());

        assert_eq!(
            probe.equivalent_rust_integer(&signed).unwrap().unwrap().name(),
            format!("i{}", bits)
        );
        assert_eq!(
            probe.equivalent_rust_integer(&unsigned).unwrap().unwrap().name(),
            format!("u{}", bits)
        );
    }

    for (alias, primitive) in [
        ("alias_float_32_bit", RustPrimitive::F32),
        ("alias_float_64_bit", RustPrimitive::F64),
    ] {
        assert_eq!(probe.size_of(alias).unwrap(), primitive.size());
        assert_eq!(probe.numeric_kind(alias).unwrap(), NumericKind::Float);
        assert_eq!(probe.equivalent_rust_integer(alias).unwrap(), None);
        assert_eq!(probe.equivalent_rust_type(alias).unwrap(), Some(primitive));
    }
}

#[test]
fn layout_of_fixture_types() {
    let Some(probe) = fixture_probe("test_types.h") else { return };
    let layout = probe.layout_of("alias_unsigned_16_bit").unwrap();
    assert_eq!(layout.size, 2);
    assert_eq!(layout.kind, Some(NumericKind::UnsignedInt));
    assert_eq!(layout.rust, Some(RustPrimitive::U16));
}

#[test]
fn layout_of_struct_has_no_numeric_kind() {
    let Some(probe) = fixture_probe("test_constants.h") else { return };
    let layout = probe.layout_of("struct point").unwrap();
    assert!(layout.size >= 17);
    assert_eq!(layout.kind, None);
    assert_eq!(layout.rust, None);
}

#[test]
fn integer_constants() {
    let Some(probe) = fixture_probe("test_constants.h") else { return };
    assert_eq!(probe.signed_integer_constant("negative_one").unwrap(), -1);
    assert_eq!(probe.signed_integer_constant("NEGATIVE_ONE").unwrap(), -1);
    assert_eq!(probe.signed_integer_constant("BLUE").unwrap(), 6);
    assert_eq!(
        probe.unsigned_integer_constant("ALL_BITS_64").unwrap(),
        u64::MAX
    );
}

#[test]
fn bindings_for_fixture() {
    let Some(mut config) = config() else { return };
    config.include_dirs.push(fixtures_dir());
    config.headers.push("test_types.h".into());
    config.headers.push("test_constants.h".into());
    let probe = config.into_probe().unwrap();

    let mut request = BindingsRequest::new();
    request
        .add_type("alias_signed_32_bit")
        .add_type("alias_float_32_bit")
        .add_signed_constant("NEGATIVE_ONE")
        .add_unsigned_constant("FEATURE_ENABLED");
    let bindings = request.generate(&probe).unwrap();

    assert_eq!(
        bindings.get("alias_signed_32_bit"),
        Some(Item::TypeAlias(RustPrimitive::I32))
    );
    assert_eq!(
        bindings.render(&EmitConfig::default()),
        "#[allow(non_camel_case_types)]\n\
         pub type alias_signed_32_bit = i32;\n\
         #[allow(non_camel_case_types)]\n\
         pub type alias_float_32_bit = f32;\n\
         pub const NEGATIVE_ONE: i64 = -1;\n\
         pub const FEATURE_ENABLED: u64 = 1;\n"
    );
}
