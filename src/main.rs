fn main() {
    slang::term::main()
}
