// Integration tests for the tape machine

use polytape::interpreter::{run, FaultKind, MachineStatus, TapeMachine};
use polytape::lexicon::{load, registry};
use polytape::program::Program;

fn load_bf(source: &str) -> Program {
    load(source.as_bytes(), "Brainfuck", registry::builtin()).expect("Loading failed")
}

fn run_bf(source: &str, input: &str) -> (TapeMachine, Result<(), polytape::interpreter::Fault>, Vec<u8>) {
    let mut machine = TapeMachine::new(load_bf(source));
    let mut output = Vec::new();
    let result = machine.run(&mut input.as_bytes(), &mut output);
    (machine, result, output)
}

#[test]
fn test_hello_h_fixture() {
    let source = "++++++++[>++++[>++>+++>+++>+<<<<-]>+>+>->>+[<]<-]>>.";
    let (machine, result, output) = run_bf(source, "");

    assert!(result.is_ok(), "Execution failed: {:?}", result);
    assert_eq!(output, b"H");
    assert_eq!(machine.state().tape().cells(), &[0, 0, 72, 104, 88, 32, 8]);
    assert_eq!(machine.state().cursor(), 2);
}

#[test]
fn test_echo_one_character() {
    let mut output = Vec::new();
    let result = run(load_bf(",."), &mut "A".as_bytes(), &mut output);

    assert!(result.is_ok(), "Execution failed: {:?}", result);
    assert_eq!(output, b"A");
}

#[test]
fn test_single_unmatched_loop_start() {
    let (machine, result, _) = run_bf("[", "");
    let fault = result.unwrap_err();

    assert!(matches!(fault.kind(), FaultKind::UnmatchedLoopStart));
    assert_eq!(fault.offset(), 0);
    assert_eq!(machine.status(), MachineStatus::Faulted);
    assert_eq!(fault.diagnostic().render(), "[\n^ here");
}

#[test]
fn test_move_left_first_underflows() {
    let (_, result, _) = run_bf("<+", "");
    let fault = result.unwrap_err();

    assert!(matches!(fault.kind(), FaultKind::CursorUnderflow));
    assert_eq!(fault.offset(), 0);
}

#[test]
fn test_unmatched_loop_end_reports_its_own_offset() {
    let (_, result, _) = run_bf("+ comment +]", "");
    let fault = result.unwrap_err();

    assert!(matches!(fault.kind(), FaultKind::UnmatchedLoopEnd));
    assert_eq!(fault.offset(), 2);
    assert_eq!(fault.diagnostic().program(), "++]");
}

#[test]
fn test_well_nested_programs_terminate_cleanly() {
    let programs = [
        "[]",
        "[[[]]]",
        "+[-]",
        "++[>++[>+<-]<-]",
        "+++[>+++[>+++[>+<-]<-]<-]",
        "[-][+]>[<]",
        "+>+>+[[-]<]",
    ];

    for source in programs {
        let (machine, result, _) = run_bf(source, "");
        assert!(result.is_ok(), "{} failed: {:?}", source, result);
        assert_eq!(machine.status(), MachineStatus::Halted, "{}", source);
    }
}

#[test]
fn test_deep_nesting_result() {
    let (machine, result, _) = run_bf("+++[>+++[>+++[>+<-]<-]<-]", "");
    assert!(result.is_ok());
    assert_eq!(machine.state().tape().cells(), &[0, 0, 0, 27]);
}

#[test]
fn test_loop_skip_jumps_over_nested_body() {
    // Cell 0 is zero so the outer loop, including its inner loop, is skipped
    let (machine, result, output) = run_bf("[+[.]+.]>+", "");
    assert!(result.is_ok());
    assert!(output.is_empty());
    assert_eq!(machine.state().tape().cells(), &[0, 1]);
}

#[test]
fn test_input_end_of_stream_faults() {
    let (_, result, output) = run_bf(",.,.", "x");
    let fault = result.unwrap_err();

    assert!(matches!(fault.kind(), FaultKind::InputFailure(_)));
    assert_eq!(fault.offset(), 2);
    assert_eq!(output, b"x");
}

#[test]
fn test_unicode_round_trip_through_cells() {
    let (machine, result, output) = run_bf(",.", "✕");
    assert!(result.is_ok());
    assert_eq!(machine.state().tape().cells(), &[0x2715]);
    assert_eq!(String::from_utf8(output).unwrap(), "✕");
}

#[test]
fn test_negative_cell_prints_replacement() {
    let (_, result, output) = run_bf("-.", "");
    assert!(result.is_ok());
    assert_eq!(String::from_utf8(output).unwrap(), "\u{FFFD}");
}

#[test]
fn test_fresh_machine_from_same_program() {
    let program = load_bf(",+.");
    let mut first = Vec::new();
    let mut second = Vec::new();

    TapeMachine::new(program.clone())
        .run(&mut "a".as_bytes(), &mut first)
        .unwrap();
    TapeMachine::new(program)
        .run(&mut "b".as_bytes(), &mut second)
        .unwrap();

    assert_eq!(first, b"b");
    assert_eq!(second, b"c");
}

#[test]
fn test_independent_machines_in_parallel() {
    let handles: Vec<_> = (0..4u8)
        .map(|i| {
            std::thread::spawn(move || {
                let source = format!("{}.", "+".repeat(65 + i as usize));
                let program = load(source.as_bytes(), "Brainfuck", registry::builtin()).unwrap();
                let mut output = Vec::new();
                run(program, &mut std::io::empty(), &mut output).unwrap();
                output
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), vec![b'A' + i as u8]);
    }
}
