//! Demo workload printed through the installed console

use std::thread;

use beans_console::{ConsoleWriter, PrimitiveBoundary, Value};

/// A value printed through the opaque path
struct Version {
    major: u32,
    minor: u32,
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "v{}.{}", self.major, self.minor)
    }
}

/// Print one sample of every value kind
pub fn print_samples<B: PrimitiveBoundary>(console: &ConsoleWriter<B>) {
    let chars = ['b', 'e', 'a', 'n', 's'];
    let version = Version { major: 0, minor: 1 };

    console.print("bool:   ");
    console.println(true);
    console.print("char:   ");
    console.println('λ');
    console.print("chars:  ");
    console.println(&chars[..]);
    console.print("int:    ");
    console.println(i32::MIN);
    console.print("long:   ");
    console.println(i64::MAX);
    console.print("float:  ");
    console.println(3.14159f32);
    console.print("double: ");
    console.println(6.02214076e23f64);
    console.print("opaque: ");
    console.println(Value::display(&version));
    console.print("absent: ");
    console.println(Value::ABSENT);
    console.print("bytes:  ");
    for code in [321, 322, 323] {
        console.write_byte(code);
    }
    console.newline();
}

/// Print `lines` numbered lines from each of `threads` threads
pub fn run_threads<B: PrimitiveBoundary>(console: &ConsoleWriter<B>, threads: usize, lines: usize) {
    thread::scope(|s| {
        for t in 0..threads {
            s.spawn(move || {
                for i in 0..lines {
                    let line = format!("[worker {}] line {}", t, i);
                    console.println(&line);
                }
            });
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use beans_console::mock::RecordingBoundary;
    use beans_console::{ConsoleConfig, LineTerminator};

    fn recording_console(recorder: &RecordingBoundary) -> ConsoleWriter<&RecordingBoundary> {
        ConsoleWriter::with_config(
            recorder,
            ConsoleConfig::new().with_terminator(LineTerminator::Lf),
        )
    }

    #[test]
    fn test_samples_cover_every_kind() {
        let recorder = RecordingBoundary::new();
        print_samples(&recording_console(&recorder));

        let expected = "\
bool:   true
char:   λ
chars:  beans
int:    -2147483648
long:   9223372036854775807
float:  3.14159
double: 6.02214076E23
opaque: v0.1
absent: null
bytes:  ABC
";
        assert_eq!(recorder.output(), expected);
    }

    #[test]
    fn test_threads_emit_whole_lines() {
        let recorder = RecordingBoundary::new();
        run_threads(&recording_console(&recorder), 3, 4);

        let output = recorder.output();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 12);
        assert!(lines
            .iter()
            .all(|line| line.starts_with("[worker ") && line.contains("] line ")));
    }
}
