//! Shared test fixtures: a scripted mock driver and its journal.

use std::cell::RefCell;
use std::rc::Rc;

use sqlbulk::{BulkError, Connection, Context, Result, Transaction, Value};

/// Everything the mock driver observed, shared out via `Rc` so tests can
/// inspect it after the connection moved into `Bulk`.
#[derive(Debug, Default)]
pub struct Journal {
    pub executed: Vec<(String, Vec<Value<'static>>)>,
    pub ctx_cancelled: Vec<bool>,
    pub begun: usize,
    pub committed: bool,
    pub rolled_back: bool,
}

/// Scripted failure points.
#[derive(Debug, Default, Clone, Copy)]
pub struct Script {
    pub fail_begin: bool,
    /// 0-based index of the execute call that fails.
    pub fail_at: Option<usize>,
    pub fail_commit: bool,
}

pub struct MockConnection {
    journal: Rc<RefCell<Journal>>,
    script: Script,
}

impl MockConnection {
    pub fn new(script: Script) -> (Self, Rc<RefCell<Journal>>) {
        let journal = Rc::new(RefCell::new(Journal::default()));
        (
            Self {
                journal: Rc::clone(&journal),
                script,
            },
            journal,
        )
    }
}

pub struct MockTransaction {
    journal: Rc<RefCell<Journal>>,
    script: Script,
    calls: usize,
}

impl Connection for MockConnection {
    type Transaction<'conn>
        = MockTransaction
    where
        Self: 'conn;

    fn begin(&mut self) -> Result<Self::Transaction<'_>> {
        if self.script.fail_begin {
            return Err(BulkError::Transaction("scripted begin failure".into()));
        }
        self.journal.borrow_mut().begun += 1;
        Ok(MockTransaction {
            journal: Rc::clone(&self.journal),
            script: self.script,
            calls: 0,
        })
    }
}

impl Transaction for MockTransaction {
    fn execute(&mut self, ctx: &Context, sql: &str, params: &[Value<'_>]) -> Result<usize> {
        let call = self.calls;
        self.calls += 1;

        if self.script.fail_at == Some(call) {
            return Err(BulkError::Transaction("scripted execution failure".into()));
        }

        let mut journal = self.journal.borrow_mut();
        journal.ctx_cancelled.push(ctx.is_cancelled());
        journal.executed.push((
            sql.to_string(),
            params.iter().map(|p| p.clone().into_static()).collect(),
        ));
        Ok(params.len())
    }

    fn commit(self) -> Result<()> {
        if self.script.fail_commit {
            return Err(BulkError::Transaction("scripted commit failure".into()));
        }
        self.journal.borrow_mut().committed = true;
        Ok(())
    }

    fn rollback(self) -> Result<()> {
        self.journal.borrow_mut().rolled_back = true;
        Ok(())
    }
}
