fn main() -> Result<(), seekbar_components::ConfigError> {
    example::desktop_main()
}
