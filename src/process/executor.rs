use std::ffi::{CStr, CString};
use std::io::{self, Write};

use libc::c_char;

use super::{resolve, ProcessError, Redirect};
use crate::core::SearchPath;

/// Exit status of a child that could not open its redirect target or exec.
const CHILD_FAILURE: libc::c_int = 1;
const REDIRECT_MODE: libc::c_uint = 0o644;

/// Runs one external job at a time: resolve, fork, wire redirection, exec, wait.
#[derive(Clone, Default)]
pub struct ProcessExecutor;

impl ProcessExecutor {
    pub fn new() -> Self {
        Self
    }

    /// Runs `tokens` as an external job and returns the child's exit status.
    pub fn spawn_job(
        &self,
        tokens: &[String],
        search_path: &SearchPath,
    ) -> Result<i32, ProcessError> {
        let Some(name) = tokens.first() else {
            return Ok(0);
        };
        let redirect = Redirect::parse(tokens)?;

        let program = resolve(search_path, name)
            .ok_or_else(|| ProcessError::CommandNotFound(name.clone()))?;
        log::debug!("resolved {} -> {}", name, program);

        let args = match &redirect {
            Some(redirect) => redirect.strip(tokens),
            None => tokens,
        };
        let target = redirect.as_ref().map(|r| r.target.as_str());
        self.spawn_process(&program, &args[1..], target)
    }

    /// Forks and execs `program` with `argv[0]` set to `program` itself.
    pub fn spawn_process(
        &self,
        program: &str,
        args: &[String],
        target: Option<&str>,
    ) -> Result<i32, ProcessError> {
        let program = to_cstring(program)?;
        let args = args
            .iter()
            .map(|arg| to_cstring(arg))
            .collect::<Result<Vec<_>, _>>()?;
        let target = target.map(to_cstring).transpose()?;

        let mut argv: Vec<*const c_char> = Vec::with_capacity(args.len() + 2);
        argv.push(program.as_ptr());
        argv.extend(args.iter().map(|arg| arg.as_ptr()));
        argv.push(std::ptr::null());

        let _ = io::stdout().flush();

        match unsafe { libc::fork() } {
            -1 => Err(ProcessError::Fork(io::Error::last_os_error())),
            0 => unsafe { exec_child(&program, &argv, target.as_deref()) },
            pid => {
                let status = wait_for(pid)?;
                log::debug!("child {} exited with status {}", pid, status);
                Ok(status)
            }
        }
    }
}

fn to_cstring(value: &str) -> Result<CString, ProcessError> {
    CString::new(value).map_err(|_| ProcessError::InvalidArgument(value.to_string()))
}

/// Runs in the forked child; only async-signal-safe calls from here on.
unsafe fn exec_child(program: &CStr, argv: &[*const c_char], target: Option<&CStr>) -> ! {
    if let Some(target) = target {
        let fd = libc::open(
            target.as_ptr(),
            libc::O_WRONLY | libc::O_CREAT | libc::O_TRUNC,
            REDIRECT_MODE,
        );
        if fd < 0 {
            libc::_exit(CHILD_FAILURE);
        }
        if libc::dup2(fd, libc::STDOUT_FILENO) < 0 || libc::dup2(fd, libc::STDERR_FILENO) < 0 {
            libc::_exit(CHILD_FAILURE);
        }
        if fd != libc::STDOUT_FILENO && fd != libc::STDERR_FILENO {
            libc::close(fd);
        }
    }

    libc::execv(program.as_ptr(), argv.as_ptr());
    libc::_exit(CHILD_FAILURE)
}

fn wait_for(pid: libc::pid_t) -> Result<i32, ProcessError> {
    let mut status: libc::c_int = 0;
    loop {
        if unsafe { libc::waitpid(pid, &mut status, 0) } == pid {
            break;
        }
        let err = io::Error::last_os_error();
        if err.kind() != io::ErrorKind::Interrupted {
            return Err(ProcessError::Wait(err));
        }
    }

    if libc::WIFEXITED(status) {
        Ok(libc::WEXITSTATUS(status))
    } else if libc::WIFSIGNALED(status) {
        Ok(128 + libc::WTERMSIG(status))
    } else {
        Ok(status)
    }
}
