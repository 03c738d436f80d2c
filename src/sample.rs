//! Built-in OpenQASM 2.0 sample program
//!
//! A three-qubit GHZ circuit. The text has no trailing line feed, so splitting
//! it on `'\n'` drops the final measurement line.

/// The sample program's source text
pub const SAMPLE_QASM: &str = "OPENQASM 2.0;include 'qelib1.inc';\n\
qreg q[3];\n\
creg c[3];\n\
h q[0];\n\
cx q[0],q[1];\n\
cx q[1],q[2];\n\
measure q[0] -> c[0];\n\
measure q[1] -> c[1];\n\
measure q[2] -> c[2];";

/// Returns [`SAMPLE_QASM`]
pub fn sample() -> &'static str {
    SAMPLE_QASM
}
