use serde::Serialize;

/// Counters gathered over one replay.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SimStats {
    /// Addresses that reached the translator (well-formed ones).
    pub addresses: u64,
    pub backing_store_fetches: u64,
    pub page_table_evictions: u64,
    pub cache_hits: u64,
    pub cache_misses: u64,
    pub cache_evictions: u64,
    /// Malformed addresses dropped by a lenient replay.
    pub skipped_addresses: u64,
}

impl SimStats {
    /// Fraction of cache lookups that hit, 0.0 before any lookup.
    pub fn cache_hit_rate(&self) -> f64 {
        let lookups = self.cache_hits + self.cache_misses;
        if lookups == 0 {
            0.0
        } else {
            self.cache_hits as f64 / lookups as f64
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn print(&self) {
        println!("==========================================");
        println!(" Translation Statistics");
        println!("==========================================");
        println!("  addresses ............. {}", self.addresses);
        println!("  backing-store fetches . {}", self.backing_store_fetches);
        println!("  page-table evictions .. {}", self.page_table_evictions);
        println!("  tlb hits .............. {}", self.cache_hits);
        println!("  tlb misses ............ {}", self.cache_misses);
        println!("  tlb evictions ......... {}", self.cache_evictions);
        println!(
            "  tlb hit rate .......... {:.2}%",
            self.cache_hit_rate() * 100.0
        );
        if self.skipped_addresses > 0 {
            println!("  skipped addresses ..... {}", self.skipped_addresses);
        }
    }
}
