mod cat;
