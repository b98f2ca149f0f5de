//! Integration test: kernel pipelines through a session.
//!
//! Verifies that kernels run in order between initialization and the
//! verification scan, that the scan sees the last kernel's output, and
//! that a failing kernel aborts the run with its name attached.

use std::error::Error;

use vecadd_arena::BufferPair;
use vecadd_core::{ExecMode, KernelError, RunConfig};
use vecadd_engine::{RunError, Session};
use vecadd_kernel::{ElementwiseAdd, Kernel};
use vecadd_test_utils::{ConstKernel, FailingKernel};

/// Adds, then rejects the step if the accumulator overflowed.
struct CheckedAdd(ElementwiseAdd);

impl Kernel for CheckedAdd {
    fn name(&self) -> &str {
        "CheckedAdd"
    }

    fn step(&self, pair: &mut BufferPair) -> Result<(), KernelError> {
        self.0.apply(pair);
        match pair.y().iter().position(|v| !v.is_finite()) {
            Some(index) => Err(KernelError::NonFinite { index }),
            None => Ok(()),
        }
    }
}

fn session(len: usize) -> Session {
    Session::new(RunConfig::new(len)).unwrap()
}

#[test]
fn add_after_const_sees_const_output() {
    // y := 10, then y += x (1.0) → 11 everywhere.
    let kernels: Vec<Box<dyn Kernel>> = vec![
        Box::new(ConstKernel::new("ten", 10.0)),
        Box::new(ElementwiseAdd::new(ExecMode::Serial)),
    ];
    let report = session(64).run_with(&kernels, 11.0).unwrap();
    assert_eq!(report.max_error(), 0.0);
    assert_eq!(report.kernels_run, 2);

    let names: Vec<&str> = report
        .metrics
        .kernel_us
        .iter()
        .map(|(name, _)| name.as_str())
        .collect();
    assert_eq!(names, ["ten", "ElementwiseAdd"]);
}

#[test]
fn deviation_is_measured_against_caller_expectation() {
    let kernels: Vec<Box<dyn Kernel>> = vec![Box::new(ConstKernel::new("five", 5.0))];
    let report = session(16).run_with(&kernels, 3.0).unwrap();
    assert_eq!(report.max_error(), 2.0);
    assert_eq!(report.verification.worst_index, Some(0));
    assert!(!report.verification.passed(1.0));
}

#[test]
fn failing_kernel_aborts_run() {
    let kernels: Vec<Box<dyn Kernel>> = vec![
        Box::new(ElementwiseAdd::new(ExecMode::Serial)),
        Box::new(FailingKernel::new("flaky", 0)),
        Box::new(ElementwiseAdd::new(ExecMode::Serial)),
    ];
    match session(8).run_with(&kernels, 3.0) {
        Err(RunError::KernelFailed { name, reason }) => {
            assert_eq!(name, "flaky");
            assert!(matches!(reason, KernelError::ExecutionFailed { .. }));
        }
        other => panic!("expected KernelFailed, got {other:?}"),
    }
}

#[test]
fn failing_kernel_succeeds_until_its_budget() {
    let flaky = FailingKernel::new("flaky", 1);
    let kernels: Vec<Box<dyn Kernel>> = vec![Box::new(flaky)];
    let s = session(4);
    // First call stamps y with the call index 0.
    let report = s.run_with(&kernels, 0.0).unwrap();
    assert_eq!(report.max_error(), 0.0);
    // Second run reuses the same kernel instance, which is now exhausted.
    match s.run_with(&kernels, 0.0) {
        Err(RunError::KernelFailed { name, reason }) => {
            assert_eq!(name, "flaky");
            assert_eq!(reason.to_string(), "execution failed: step budget of 1 exhausted");
        }
        other => panic!("expected KernelFailed, got {other:?}"),
    }
}

#[test]
fn checked_kernel_reports_overflow() {
    let mut config = RunConfig::new(8);
    config.x_fill = f32::MAX;
    config.y_fill = f32::MAX;
    let kernels: Vec<Box<dyn Kernel>> = vec![Box::new(CheckedAdd(ElementwiseAdd::new(
        ExecMode::Serial,
    )))];
    let err = Session::new(config)
        .unwrap()
        .run_with(&kernels, 0.0)
        .unwrap_err();
    match &err {
        RunError::KernelFailed { name, reason } => {
            assert_eq!(name, "CheckedAdd");
            assert_eq!(reason, &KernelError::NonFinite { index: 0 });
        }
        other => panic!("expected KernelFailed, got {other:?}"),
    }
    let source = err.source().map(|e| e.to_string());
    assert_eq!(
        source.as_deref(),
        Some("non-finite value in output at index 0")
    );
}

#[test]
fn checked_kernel_passes_finite_output() {
    let kernels: Vec<Box<dyn Kernel>> = vec![Box::new(CheckedAdd(ElementwiseAdd::new(
        ExecMode::Parallel,
    )))];
    let report = session(1000).run_with(&kernels, 3.0).unwrap();
    assert_eq!(report.max_error(), 0.0);
}

#[test]
fn empty_pipeline_verifies_initial_state() {
    let report = session(32).run_with(&[], 2.0).unwrap();
    assert_eq!(report.kernels_run, 0);
    assert_eq!(report.max_error(), 0.0);
}

#[test]
fn parallel_repeated_run_accumulates() {
    let s = Session::new(RunConfig::new(50_000).with_exec_mode(ExecMode::Parallel)).unwrap();
    let report = s.run_repeated(3).unwrap();
    assert_eq!(report.expected, 5.0);
    assert_eq!(report.max_error(), 0.0);
}
