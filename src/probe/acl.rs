// Tue Jan 13 2026 - Alex

use log::debug;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

/// Secondary permission signal backed by an external tool that can talk to
/// the provider without credentials.
pub trait AclProbe: Send + Sync {
    fn name(&self) -> &str;

    fn is_available(&self) -> bool;

    /// `true` if an anonymous listing or ACL read of `bucket` succeeded.
    fn anonymous_access(&self, bucket: &str) -> bool;
}

pub struct DisabledAcl;

impl AclProbe for DisabledAcl {
    fn name(&self) -> &str {
        "disabled"
    }

    fn is_available(&self) -> bool {
        false
    }

    fn anonymous_access(&self, _bucket: &str) -> bool {
        false
    }
}

/// Runs `aws s3 ls s3://<bucket> --no-sign-request`.
pub struct AwsCliAcl {
    program: String,
    timeout: Duration,
    available: bool,
}

impl AwsCliAcl {
    pub fn new(timeout: Duration) -> Self {
        Self::with_program("aws", timeout)
    }

    pub fn with_program(program: &str, timeout: Duration) -> Self {
        let available = Command::new(program)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false);

        if !available {
            debug!("{} not found, ACL fallback disabled", program);
        }

        Self {
            program: program.to_string(),
            timeout,
            available,
        }
    }

    fn run_with_timeout(&self, args: &[&str]) -> bool {
        let mut child = match Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(child) => child,
            Err(e) => {
                debug!("Failed to spawn {}: {}", self.program, e);
                return false;
            }
        };

        let deadline = Instant::now() + self.timeout;
        loop {
            match child.try_wait() {
                Ok(Some(status)) => return status.success(),
                Ok(None) if Instant::now() >= deadline => {
                    debug!("{} {:?} timed out", self.program, args);
                    let _ = child.kill();
                    let _ = child.wait();
                    return false;
                }
                Ok(None) => thread::sleep(Duration::from_millis(50)),
                Err(_) => return false,
            }
        }
    }
}

impl AclProbe for AwsCliAcl {
    fn name(&self) -> &str {
        &self.program
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn anonymous_access(&self, bucket: &str) -> bool {
        if !self.available {
            return false;
        }

        let target = format!("s3://{}", bucket);
        self.run_with_timeout(&["s3", "ls", &target, "--no-sign-request"])
    }
}
