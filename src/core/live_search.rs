use crate::core::{
    Result, Row, RowTemplate, SearchBackend, SearchField, StalePolicy, TableBody, WidgetSpec,
};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

/// What happened to one keystroke's lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The table now holds `rows` rows from this response.
    Applied { rows: usize },
    /// A newer keystroke superseded this one; the table was left alone.
    Stale,
    /// The lookup failed; the table was left alone.
    Dropped,
}

struct TableState {
    body: TableBody,
    applied_generation: u64,
}

/// Live search handler bound to one text field and one table body.
///
/// Every keystroke sends the full field value to the widget's endpoint and,
/// on success, replaces the table rows with the rendered results in response
/// order. Lookups are not cancelled, so several may be in flight at once.
pub struct LiveSearch<B: SearchBackend, T: RowTemplate> {
    spec: WidgetSpec,
    backend: B,
    template: T,
    state: Mutex<TableState>,
    issued_generation: AtomicU64,
    policy: StalePolicy,
    debounce: Duration,
}

impl<B: SearchBackend, T: RowTemplate> LiveSearch<B, T> {
    pub fn new(spec: WidgetSpec, backend: B, template: T) -> Self {
        let body = TableBody::new(spec.table_selector.clone());
        Self {
            spec,
            backend,
            template,
            state: Mutex::new(TableState {
                body,
                applied_generation: 0,
            }),
            issued_generation: AtomicU64::new(0),
            policy: StalePolicy::default(),
            debounce: Duration::ZERO,
        }
    }

    pub fn with_stale_policy(mut self, policy: StalePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn spec(&self) -> &WidgetSpec {
        &self.spec
    }

    pub fn stale_policy(&self) -> StalePolicy {
        self.policy
    }

    /// A fresh field bound to this widget's input selector.
    pub fn field(&self) -> SearchField {
        SearchField::new(self.spec.field_selector.clone())
    }

    /// Fetches and renders rows for `value` without touching the table.
    pub async fn lookup(&self, value: &str) -> Result<Vec<Row>> {
        tracing::debug!("🔍 {} lookup: {}?value={:?}", self.spec.name, self.spec.endpoint, value);
        let results = self.backend.search(&self.spec.endpoint, value).await?;
        Ok(results.iter().map(|r| self.template.render(r)).collect())
    }

    /// Runs the full handler for one keystroke carrying `value`.
    pub async fn on_input(&self, value: &str) -> Outcome {
        let generation = self.next_generation();
        self.handle(generation, value).await
    }

    /// Reads the field and starts its lookup in the background.
    pub fn keyup(self: &Arc<Self>, field: &SearchField) -> JoinHandle<Outcome>
    where
        B: 'static,
        T: 'static,
    {
        // 代數在按鍵當下決定，而非任務執行時
        let generation = self.next_generation();
        let value = field.value().to_string();
        let this = Arc::clone(self);
        tokio::spawn(async move { this.handle(generation, &value).await })
    }

    /// Types `text` one char at a time, firing a keyup after each char.
    pub fn type_text(
        self: &Arc<Self>,
        field: &mut SearchField,
        text: &str,
    ) -> Vec<JoinHandle<Outcome>>
    where
        B: 'static,
        T: 'static,
    {
        text.chars()
            .map(|c| {
                field.push_char(c);
                self.keyup(field)
            })
            .collect()
    }

    pub async fn snapshot(&self) -> TableBody {
        self.state.lock().await.body.clone()
    }

    pub async fn row_count(&self) -> usize {
        self.state.lock().await.body.len()
    }

    fn next_generation(&self) -> u64 {
        self.issued_generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    async fn handle(&self, generation: u64, value: &str) -> Outcome {
        if !self.debounce.is_zero() {
            tokio::time::sleep(self.debounce).await;
            if self.issued_generation.load(Ordering::SeqCst) != generation {
                tracing::debug!("{} keystroke #{} debounced", self.spec.name, generation);
                return Outcome::Stale;
            }
        }

        let rows = match self.lookup(value).await {
            Ok(rows) => rows,
            Err(e) => {
                // 失敗時保留原本的表格內容
                tracing::warn!(
                    "⚠️ {} search for {:?} dropped: {}",
                    self.spec.name,
                    value,
                    e
                );
                return Outcome::Dropped;
            }
        };

        let mut state = self.state.lock().await;
        if self.policy == StalePolicy::Discard && state.applied_generation > generation {
            tracing::debug!(
                "{} keystroke #{} is stale (#{} already shown)",
                self.spec.name,
                generation,
                state.applied_generation
            );
            return Outcome::Stale;
        }

        let count = rows.len();
        state.body.replace_rows(rows);
        state.applied_generation = state.applied_generation.max(generation);
        tracing::debug!(
            "✅ {} table {} now has {} rows",
            self.spec.name,
            self.spec.table_selector,
            count
        );
        Outcome::Applied { rows: count }
    }
}
