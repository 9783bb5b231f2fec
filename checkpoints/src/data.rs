//! Hardcoded per-network checkpoint tables
//!
//! Checkpoint blocks are picked from well-settled history: sane timestamps
//! on both sides and no unusual transactions. The summary fields describe
//! the chain at the highest entry and feed the sync progress estimate.

pub(crate) struct NetworkData {
    /// (height, block hash) pairs, strictly ascending by height
    pub entries: &'static [(u64, &'static str)],
    /// Timestamp of the highest checkpointed block
    pub time_last_checkpoint: u64,
    /// Cumulative transaction count at the highest checkpointed block
    pub txs_last_checkpoint: u64,
    /// Estimated transaction rate after the highest checkpoint
    pub txs_per_day: f64
}

pub(crate) static MAINNET: NetworkData = NetworkData {
    entries: &[
        (0, "fb6a19a31293de12035e5cdaadce2a8552d3feeec6fa5f910101d9d8c579b566"),
        (5, "990a966a5bdc7554f4d2416991052e6bc24a5d0b97ed1fe663b502673f609667"),
        (56, "7a0eb0bdaf399e37a865897c6bb385a444b90cec45a684671b1efd6f2de3bb48"),
        (113, "611447a153975ec76c3cd39caacce099f985fd361ff32116161b3140c87df8aa"),
        (581, "03409ddba296135417bb50e47d00af87c928c82672cc60a2d91eb6b7b43b1346"),
        (1584, "1539677547b7e39de13e8ff69add07a7c5b69f9f2a07674078ca6a12581584c0"),
        (5048, "44756946793ef59f493a5dfe6f6dc3ea6d01821959d2fef1605f6ee907788bc6"),
        (16842, "81b49335e8627353b51820d5d2ae00754f4fd10a5eee154a867f1699cbccc82c"),
        (20625, "b84ed271f5541a7409604ea23771f452968229759e207ffd8bf1e79259d7b06e"),
        (27548, "42b51999e185e5c0c8d73f6abe809158c3a26d8120f72c2bbcabe28239a9c078"),
        (35249, "615d8a1ac0ac0090e6b3bea6decd2e28d646903a64dd818a0a03ca091a96a0c6"),
        (47101, "53e80e86aa8315dcd05f8ba7595fb810b4b5b795284844264ae0c1330a332da3")
    ],
    time_last_checkpoint: 1381577726,
    txs_last_checkpoint: 57042,
    txs_per_day: 700.0
};

pub(crate) static TESTNET: NetworkData = NetworkData {
    entries: &[
        (0, "83b9153a393cb8b9c4857932f37b2c3fb8ce65077029b8f7e3b2db11a7fae0d1"),
        (1, "49819431645311975fbebb7428dc4741064fe1045f20fb09aafd8365b75134ed"),
        (59, "81833f79c205122ed6bd810f4a1bf3ae3782a3e8998511913b348c012609d8a3"),
        (127, "23535df5a0c3539ad61a64e7f556b54a2aae83dc85dc347ef07ae953a344966a"),
        (982, "c6c38c8007b5e2f804b79c646883b960b7b6a1d1ab587cd15b05ae1810f3e030"),
        (1625, "8be9c4a925a915355c668b8cd8da4d0a1833f7b7447f2d82bfd8a586bdc3c8d0"),
        (2187, "79ed73d5b20912e92851e7b00f9f8f68f0ac49bab9147d45712c24dbb72e6df3"),
        (2845, "d79ba9298c6ead84df8827703b5231250f35a956329be7edacae9253b5f8cbee"),
        (3549, "d3947d507db61372f27838a8693b90a9a43d8a629010fac0c1514ae07672ba10"),
        (5012, "bff1416e7cc022fb07fdb1a570e812e05320a637ca33444c92dd818a7ad0d3f0"),
        (6010, "492c3eeca4e32ca162b656f5f7b2ac81f3b995523216abc9fb41d1e3e31a04c7")
    ],
    time_last_checkpoint: 1380278351,
    txs_last_checkpoint: 6647,
    txs_per_day: 80.0
};
