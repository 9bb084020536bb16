fn main() {
    repair_ticketing_system::server::run();
}
