//! SQLite output backend (feature `sqlite`).
//!
//! One `output.db` file with the tables `tick_summaries`,
//! `infection_events` and `agent_snapshots`.

use std::path::Path;

use rusqlite::{Connection, params};

use crate::writer::OutputWriter;
use crate::{AgentSnapshotRow, InfectionEventRow, OutputResult, TickSummaryRow};

pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and create the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS tick_summaries (
                 tick           INTEGER PRIMARY KEY,
                 healthy        INTEGER NOT NULL,
                 infected       INTEGER NOT NULL,
                 immune         INTEGER NOT NULL,
                 new_infections INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS infection_events (
                 tick     INTEGER NOT NULL,
                 x        REAL    NOT NULL,
                 y        REAL    NOT NULL,
                 agent_id INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS agent_snapshots (
                 agent_id        INTEGER NOT NULL,
                 tick            INTEGER NOT NULL,
                 x               REAL    NOT NULL,
                 y               REAL    NOT NULL,
                 status          TEXT    NOT NULL,
                 infection_timer INTEGER NOT NULL,
                 immunity_timer  INTEGER NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO tick_summaries (tick, healthy, infected, immune, new_infections) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![row.tick, row.healthy, row.infected, row.immune, row.new_infections],
        )?;
        Ok(())
    }

    fn write_events(&mut self, rows: &[InfectionEventRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO infection_events (tick, x, y, agent_id) VALUES (?1, ?2, ?3, ?4)",
            )?;
            for row in rows {
                stmt.execute(params![row.tick, row.x, row.y, row.agent_id])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO agent_snapshots \
                 (agent_id, tick, x, y, status, infection_timer, immunity_timer) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;
            for row in rows {
                stmt.execute(params![
                    row.agent_id,
                    row.tick,
                    row.x,
                    row.y,
                    row.status,
                    row.infection_timer,
                    row.immunity_timer,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
