use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(chacha20_force_soft)] {
        pub(crate) mod soft;
        pub(crate) use soft::Backend;
    } else {
        pub(crate) mod soft;
        pub(crate) mod wide;
        pub(crate) use wide::Backend;
    }
}
