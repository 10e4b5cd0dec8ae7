mod dashboard;
pub use dashboard::Dashboard;

mod profile;
pub use profile::Profile;

pub(crate) fn make_prefs() -> store::Prefs<impl store::PrefStore> {
    #[cfg(target_arch = "wasm32")]
    {
        store::Prefs::new(store::LocalStorageStore::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        store::Prefs::new(store::MemoryStore::shared())
    }
}
