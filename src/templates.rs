use crate::paths::to_upper_ascii;

/// Renders the header file placed at `lib/<project>.h`. The include guard is
/// the ASCII-uppercased project name.
pub fn header(project: &str) -> String {
    let guard = to_upper_ascii(project);

    format!("#ifndef {guard}_H\n#define {guard}_H\n/* Code goes here */\n\n#endif")
}

/// Renders the generic C source boilerplate used for the library, app and
/// test sources alike.
pub fn c_source(project: &str) -> String {
    format!("#include \"{project}.h\"\n\n/* Code goes here */\n\n")
}

/// Renders the catch-all body for any other extension.
pub fn fallback(project: &str) -> String {
    format!("/* Project {project} */")
}

/// Renders the Makefile. The same content is written to both `Makefile` and
/// `Makefile.win`; the two have never diverged. The `clean` target carries no
/// recipe.
pub fn makefile(project: &str) -> String {
    format!(
        "IDIR =./include\n\
         CC=gcc\n\
         CFLAGS=-I$(IDIR)\n\
         ODIR=obj\n\
         LDIR =./lib\n\
         LIBS=\n\
         \n\
         _DEPS = {project}.h\n\
         DEPS = $(patsubst %,$(IDIR)/%,$(_DEPS))\n\
         \n\
         _OBJ = {project}.o {project}_test.o {project}_app.o\n\
         OBJ = $(patsubst %,$(ODIR)/%,$(_OBJ))\n\
         \n\
         $(ODIR)/%.o: %.c $(DEPS)\n\
         \t$(CC) -c -o $@ $< $(CFLAGS)\n\
         \n\
         {project}: $(OBJ)\n\
         \tgcc -o $@ $^ $(CFLAGS) $(LIBS)\n\
         \n\
         .PHONY: clean\n\
         \n\
         clean:"
    )
}
