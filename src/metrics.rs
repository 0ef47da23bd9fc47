//! # Métricas de Processo
//!
//! Snapshot de RAM/CPU do processo exibido no playground após cada
//! reconhecimento e no endpoint `/status`.
//!
//! | Categoria | Métrica | Fonte |
//! |-----------|---------|-------|
//! | RAM | Processo (MB) / Total (MB) | `sysinfo` |
//! | CPU | Cores ativos / Total / Pico por core | `sysinfo` |
//! | Motor | Domínios e entradas de dicionário | `IntentEngine` |
//! | Throughput | textos/s (opcional, lotes) | calculado externamente |
//!
//! ## Estado Persistente (System singleton)
//!
//! A lib `sysinfo` precisa de um baseline anterior para calcular deltas de
//! CPU. Por isso mantemos uma única instância [`System`] via [`OnceLock`] +
//! [`Mutex`], reutilizada em todas as coletas.

use std::sync::OnceLock;

use parking_lot::Mutex;
use serde::Serialize;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::nlu::IntentEngine;

/// Singleton da instância [`System`] da lib `sysinfo`.
static SYS: OnceLock<Mutex<System>> = OnceLock::new();

fn system() -> &'static Mutex<System> {
    SYS.get_or_init(|| {
        let mut s = System::new();
        s.refresh_cpu_usage(); // baseline para deltas futuros
        Mutex::new(s)
    })
}

/// Snapshot de métricas do processo e do motor.
#[derive(Clone, Debug, Serialize)]
pub struct ProcessMetrics {
    /// Memória RSS do processo em MB.
    pub memory_used_mb: f64,
    /// Memória total do sistema em MB.
    pub memory_total_mb: f64,
    /// Cores com uso > 1%.
    pub cpu_active_cores: usize,
    /// Maior uso individual de CPU (%).
    pub cpu_max_core_percent: f32,
    pub cpu_total_cores: usize,
    /// Domínios com recognizer ativo.
    pub domains: usize,
    /// Total de entradas em todos os dicionários.
    pub dictionary_entries: usize,
    /// Throughput (ex: "1200 textos/s"), só em lotes.
    pub throughput: Option<String>,
}

/// Coleta um snapshot de métricas.
pub fn collect_metrics(engine: &IntentEngine, throughput: Option<String>) -> ProcessMetrics {
    let pid = Pid::from_u32(std::process::id());

    let mut sys = system().lock();
    sys.refresh_memory();
    sys.refresh_cpu_usage();
    sys.refresh_processes(ProcessesToUpdate::Some(&[pid]), false);

    let memory_used_mb = sys
        .process(pid)
        .map(|p| p.memory() as f64 / (1024.0 * 1024.0))
        .unwrap_or(0.0);
    let memory_total_mb = sys.total_memory() as f64 / (1024.0 * 1024.0);

    let cpus = sys.cpus();
    let cpu_total_cores = cpus.len();
    let cpu_active_cores = cpus.iter().filter(|c| c.cpu_usage() > 1.0).count();
    let cpu_max_core_percent = cpus.iter().map(|c| c.cpu_usage()).fold(0.0f32, f32::max);
    drop(sys);

    let recognizers = engine.recognizers();
    ProcessMetrics {
        memory_used_mb,
        memory_total_mb,
        cpu_active_cores,
        cpu_max_core_percent,
        cpu_total_cores,
        domains: recognizers.len(),
        dictionary_entries: recognizers.iter().map(|r| r.dictionary().len()).sum(),
        throughput,
    }
}

/// Throughput formatado para a linha de sumário.
pub fn throughput(count: usize, elapsed_us: u64) -> String {
    let per_sec = count as f64 / (elapsed_us.max(1) as f64 / 1_000_000.0);
    format!("{:.0} textos/s", per_sec)
}

impl ProcessMetrics {
    /// Linha de sumário exibida no chat.
    ///
    /// Formato: `"312µs | RAM 18.4 MB | CPU 1/8 cores peak 12.0% | 6 domínios, 74 entradas | 5400 textos/s"`
    pub fn summary_line(&self, elapsed_us: u64) -> String {
        let elapsed = if elapsed_us < 1000 {
            format!("{}µs", elapsed_us)
        } else {
            format!("{:.1}ms", elapsed_us as f64 / 1000.0)
        };
        let throughput_part = match &self.throughput {
            Some(t) => format!(" | {}", t),
            None => String::new(),
        };

        format!(
            "{} | RAM {:.1} MB | CPU {}/{} cores peak {:.1}% | {} domínios, {} entradas{}",
            elapsed,
            self.memory_used_mb,
            self.cpu_active_cores,
            self.cpu_total_cores,
            self.cpu_max_core_percent,
            self.domains,
            self.dictionary_entries,
            throughput_part,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(throughput: Option<String>) -> ProcessMetrics {
        ProcessMetrics {
            memory_used_mb: 18.44,
            memory_total_mb: 16384.0,
            cpu_active_cores: 1,
            cpu_total_cores: 8,
            cpu_max_core_percent: 12.0,
            domains: 6,
            dictionary_entries: 74,
            throughput,
        }
    }

    #[test]
    fn summary_line_formats_units() {
        let line = sample(None).summary_line(312);
        assert_eq!(line, "312µs | RAM 18.4 MB | CPU 1/8 cores peak 12.0% | 6 domínios, 74 entradas");
        assert!(sample(None).summary_line(2500).starts_with("2.5ms |"));
    }

    #[test]
    fn summary_line_appends_throughput() {
        let line = sample(Some(throughput(10, 2_000_000))).summary_line(10);
        assert!(line.ends_with("| 5 textos/s"), "{line}");
    }

    #[test]
    fn collect_counts_engine_dictionaries() {
        let engine = IntentEngine::new(&crate::config::EngineConfig::default()).unwrap();
        let metrics = collect_metrics(&engine, None);
        assert_eq!(metrics.domains, 6);
        assert!(metrics.dictionary_entries > 0);
    }
}
