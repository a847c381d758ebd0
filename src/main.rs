fn main() {
    mutspec::main();
}
