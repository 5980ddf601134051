use primer_core::{Diagnostics, PrimerConfig};

const EXPECTED: &str = "\
Hello World
The range of the i8 type is: (-128,127)
The range of the i16 type is: (-32768,32767)
The range of the i32 type is: (-2147483648,2147483647)
The range of the i64 type is: (-9223372036854775808,9223372036854775807)
Exceeding the maximum bound, i.e. (max+1), results in an overflow and gives us the value: -2147483648
Exceeding the minimum bound, i.e. (min-1), results in an underflow and gives us the value: 2147483647
Underflow and overflow are known as wraparounds as the minimum changes to the maximum and vice versa
The variable 'first_num' contains the value:
5
The variable 'second_num' contains the value:
5.5
The variable 'first_num' contains the following value after modification:
10
Adding 2 variables of different types together results in:
15.5
The large i32 and the pretty large i32 are equivalent numbers: true
The width of the literal '100i64' is 64 bits
";

#[test]
fn default_report_matches_reference_output() {
    let mut buf = Vec::new();
    Diagnostics::default().write_to(&mut buf).expect("write failed");
    assert_eq!(String::from_utf8(buf).expect("not utf-8"), EXPECTED);
}

#[test]
fn report_is_idempotent() {
    let diag = Diagnostics::new(PrimerConfig::new());
    let mut first = Vec::new();
    let mut second = Vec::new();
    diag.write_to(&mut first).expect("first write failed");
    diag.write_to(&mut second).expect("second write failed");
    assert_eq!(first, second);
}

#[test]
fn greeting_comes_first_and_sections_keep_order() {
    let lines = Diagnostics::default().lines().expect("lines failed");
    assert_eq!(lines[0], "Hello World");
    let overflow = lines.iter().position(|l| l.contains("(max+1)")).expect("no overflow line");
    let underflow = lines.iter().position(|l| l.contains("(min-1)")).expect("no underflow line");
    let sum = lines.iter().position(|l| l == "15.5").expect("no sum line");
    assert!(overflow < underflow && underflow < sum);
}

#[test]
fn custom_config_flows_through() {
    let mut cfg = PrimerConfig::new();
    cfg.greeting = String::from("Hi");
    cfg.first_num = 3;
    cfg.second_num = 0.25;
    cfg.scale = 4;
    let lines = Diagnostics::new(cfg).lines().expect("lines failed");
    assert_eq!(lines[0], "Hi");
    assert!(lines.contains(&"12".to_string()));
    assert!(lines.contains(&"12.25".to_string()));
}

#[test]
fn write_failure_surfaces_as_io_error() {
    struct Broken;
    impl std::io::Write for Broken {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }
    let err = Diagnostics::default().write_to(&mut Broken).unwrap_err();
    assert!(matches!(err, primer_core::PrimerError::Io(_)));
}
